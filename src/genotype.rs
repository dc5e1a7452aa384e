use crate::model::TargetSide;

/// Per-sample copies of a target allele; `None` when the call is missing.
pub type Count = Option<u8>;

fn is_missing_sentinel(gt: &str) -> bool {
    gt == "." || gt == "./."
}

/// Split on the first `|`, falling back to the first `/`.
fn split_diploid(gt: &str) -> Option<(&str, &str)> {
    gt.split_once('|').or_else(|| gt.split_once('/'))
}

fn count_code(gt: &str, code: &str, haploid_hit: &str, haploid_miss: &str) -> Count {
    if is_missing_sentinel(gt) {
        return None;
    }
    match split_diploid(gt) {
        Some((a, b)) => {
            if a == "." || b == "." {
                return None;
            }
            Some(u8::from(a == code) + u8::from(b == code))
        }
        None if gt == haploid_hit => Some(1),
        None if gt == haploid_miss => Some(0),
        None => None,
    }
}

/// Copies of the ALT allele (`1` calls).
pub fn count_alt(gt: &str) -> Count {
    count_code(gt, "1", "1", "0")
}

/// Copies of the REF allele (`0` calls).
pub fn count_ref(gt: &str) -> Count {
    count_code(gt, "0", "0", "1")
}

/// Zero when the call is present, `None` when any component is missing.
/// Used when the target matched neither REF nor ALT.
pub fn count_present(gt: &str) -> Count {
    if is_missing_sentinel(gt) {
        return None;
    }
    let missing = match split_diploid(gt) {
        Some((a, b)) => a == "." || b == ".",
        None => gt == ".",
    };
    if missing { None } else { Some(0) }
}

pub fn count_for_side(gt: &str, side: TargetSide) -> Count {
    match side {
        TargetSide::Alt => count_alt(gt),
        TargetSide::Ref => count_ref(gt),
        TargetSide::Neither => count_present(gt),
    }
}

pub fn format_count(count: Count) -> String {
    match count {
        Some(n) => n.to_string(),
        None => "NA".to_string(),
    }
}
