use crate::domain::model::GapRange;
use crate::utils::error::{NormalizeError, Result};
use std::collections::BTreeSet;

pub const DEFAULT_GAP_THRESHOLD: u64 = 10;

#[derive(Debug, Clone, Copy)]
pub struct GapScanner {
    threshold: u64,
    max_span: Option<u64>,
}

impl Default for GapScanner {
    fn default() -> Self {
        Self::new(DEFAULT_GAP_THRESHOLD)
    }
}

impl GapScanner {
    pub fn new(threshold: u64) -> Self {
        Self {
            threshold,
            max_span: None,
        }
    }

    pub fn with_max_span(mut self, max_span: Option<u64>) -> Self {
        self.max_span = max_span;
        self
    }

    /// 找出 `[min, max]` 之間長度超過門檻的連續缺漏區間。
    ///
    /// 逐一走訪區間內每個整數，成本與 `max - min` 成正比而非與詞條數成正比。
    pub fn scan<I>(&self, ukphones: I) -> Result<Vec<GapRange>>
    where
        I: IntoIterator<Item = i64>,
    {
        let present: BTreeSet<i64> = ukphones.into_iter().collect();

        let (min, max) = match (present.first(), present.last()) {
            (Some(min), Some(max)) => (*min, *max),
            _ => return Ok(Vec::new()),
        };

        let span = missing_run_len(min, max)?;
        if let Some(limit) = self.max_span {
            if span > limit {
                return Err(NormalizeError::gap_scan(format!(
                    "ukphone span {}..={} covers {} values, above the configured limit of {}",
                    min, max, span, limit
                )));
            }
        }

        tracing::debug!("Scanning ukphone span {}..={} ({} values)", min, max, span);

        let mut missing_ranges = Vec::new();
        let mut run_start: Option<i64> = None;

        for ukphone in min..=max {
            if !present.contains(&ukphone) {
                if run_start.is_none() {
                    run_start = Some(ukphone);
                }
            } else if let Some(start) = run_start.take() {
                // 遇到存在的值時收尾，最後一個缺漏值是 ukphone - 1
                let last_missing = ukphone.checked_sub(1).ok_or_else(|| {
                    NormalizeError::gap_scan(format!("underflow closing run at {}", ukphone))
                })?;
                self.record(&mut missing_ranges, start, last_missing)?;
            }
        }

        // 掃到 max 仍未結束的區間以 max 收尾
        if let Some(start) = run_start {
            self.record(&mut missing_ranges, start, max)?;
        }

        Ok(missing_ranges)
    }

    fn record(&self, ranges: &mut Vec<GapRange>, start: i64, last_missing: i64) -> Result<()> {
        let length = missing_run_len(start, last_missing)?;
        if length > self.threshold {
            ranges.push(GapRange::new(start, last_missing));
        }
        Ok(())
    }
}

/// Count of integers in the closed run `[start, last_missing]`.
pub(crate) fn missing_run_len(start: i64, last_missing: i64) -> Result<u64> {
    if last_missing < start {
        return Err(NormalizeError::gap_scan(format!(
            "run ends at {} before it starts at {}",
            last_missing, start
        )));
    }
    last_missing
        .abs_diff(start)
        .checked_add(1)
        .ok_or_else(|| {
            NormalizeError::gap_scan(format!(
                "run {}..={} is too long to measure",
                start, last_missing
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_has_no_gaps() {
        let gaps = GapScanner::default().scan(Vec::new()).unwrap();
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_short_gaps_are_ignored() {
        // {2, 5}: 缺 3、4，長度 2
        let gaps = GapScanner::default().scan(vec![5, 2]).unwrap();
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_gap_between_zero_and_twenty() {
        let gaps = GapScanner::default().scan(vec![0, 20]).unwrap();
        assert_eq!(gaps, vec![GapRange::new(1, 19)]);
    }

    #[test]
    fn test_threshold_boundary() {
        // 缺 1..=10，剛好 10 個，不算
        let gaps = GapScanner::default().scan(vec![0, 11]).unwrap();
        assert!(gaps.is_empty());

        // 缺 1..=11，11 個
        let gaps = GapScanner::default().scan(vec![0, 12]).unwrap();
        assert_eq!(gaps, vec![GapRange::new(1, 11)]);
    }

    #[test]
    fn test_multiple_gaps_and_duplicates() {
        let values = vec![100, 3, 3, 50, 51, 52, 70, 1];
        let gaps = GapScanner::default().scan(values).unwrap();
        assert_eq!(
            gaps,
            vec![
                GapRange::new(4, 49),
                GapRange::new(53, 69),
                GapRange::new(71, 99)
            ]
        );
    }

    #[test]
    fn test_negative_values() {
        let gaps = GapScanner::default().scan(vec![-30, -5, 0]).unwrap();
        assert_eq!(gaps, vec![GapRange::new(-29, -6)]);
    }

    #[test]
    fn test_custom_threshold() {
        let gaps = GapScanner::new(2).scan(vec![2, 5, 9]).unwrap();
        assert_eq!(gaps, vec![GapRange::new(6, 8)]);
    }

    #[test]
    fn test_span_limit() {
        let scanner = GapScanner::default().with_max_span(Some(100));
        assert!(scanner.scan(vec![0, 99]).is_ok());

        let err = scanner.scan(vec![0, 100]).unwrap_err();
        assert!(matches!(err, NormalizeError::GapScanError { .. }));
    }

    #[test]
    fn test_closing_formulas_agree() {
        // 以存在值 v 收尾：v - start；掃到結尾收尾：max + 1 - start
        for (start, v) in [(1i64, 20i64), (-10, 5), (7, 8), (0, 1_000)] {
            let closed_by_value = (v - start) as u64;
            assert_eq!(missing_run_len(start, v - 1).unwrap(), closed_by_value);

            let max = v - 1;
            let closed_by_end = (max + 1 - start) as u64;
            assert_eq!(missing_run_len(start, max).unwrap(), closed_by_end);
            assert_eq!(closed_by_value, closed_by_end);
        }
    }

    #[test]
    fn test_missing_run_len_extremes() {
        assert_eq!(missing_run_len(i64::MIN + 1, i64::MAX).unwrap(), u64::MAX);
        assert!(missing_run_len(i64::MIN, i64::MAX).is_err());
        assert_eq!(missing_run_len(5, 5).unwrap(), 1);
        assert!(missing_run_len(5, 4).is_err());
    }
}
