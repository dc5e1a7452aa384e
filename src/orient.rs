use crate::model::TargetSide;

/// Strand complement of a single base. Only A/T and C/G pair up.
pub fn complement(base: char) -> Option<char> {
    match base.to_ascii_uppercase() {
        'A' => Some('T'),
        'T' => Some('A'),
        'C' => Some('G'),
        'G' => Some('C'),
        _ => None,
    }
}

fn complement_of_single(allele: &str) -> Option<String> {
    let mut chars = allele.chars();
    match (chars.next(), chars.next()) {
        (Some(base), None) => complement(base).map(String::from),
        _ => None,
    }
}

/// Decide whether `target` names the REF or the ALT allele of a variant.
///
/// Rules are tried in order and the first hit wins:
/// exact match (ALT before REF), strand complement when both REF and ALT are
/// single bases, then a single-base insertion (`alt == ref + target`) or deletion
/// (`ref == alt + target`).
pub fn decide_target_side(ref_allele: &str, alt_allele: &str, target: &str) -> TargetSide {
    let r = ref_allele.to_ascii_uppercase();
    let a = alt_allele.to_ascii_uppercase();
    let t = target.to_ascii_uppercase();

    if t == a {
        return TargetSide::Alt;
    }
    if t == r {
        return TargetSide::Ref;
    }

    if let (Some(rc), Some(ac)) = (complement_of_single(&r), complement_of_single(&a)) {
        if t == rc {
            return TargetSide::Ref;
        }
        if t == ac {
            return TargetSide::Alt;
        }
    }

    if t.chars().count() == 1 {
        if a == format!("{r}{t}") {
            return TargetSide::Alt;
        }
        if r == format!("{a}{t}") {
            return TargetSide::Ref;
        }
    }

    TargetSide::Neither
}
