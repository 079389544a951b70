use crate::defines::table::MacroSpec;
use crate::error::RangeError;

/// Checks that `spec` has a non-empty range and that `target` lies in it.
pub fn validate(
    spec: &MacroSpec,
    target: i64,
) -> Result<(), RangeError> {
    if spec.max < spec.min {
        return Err(RangeError::InvalidRange {
            name: spec.name.to_string(),
            min: spec.min,
            max: spec.max,
        });
    }
    if !spec.contains(target) {
        return Err(RangeError::OutOfRange {
            name: spec.name.to_string(),
            min: spec.min,
            max: spec.max,
            value: target,
        });
    }
    Ok(())
}

/// Rewrites every `"<name> <k>"` (k in the declared range) to `"<name> <target>"`.
///
/// Only lines that contain `spec.name` are touched. On such a line the
/// replacements run for k = min..=max in increasing order, each one applied
/// to the result of the previous. Line terminators are kept as they are.
pub fn rewrite(
    content: &str,
    spec: &MacroSpec,
    target: i64,
) -> Result<String, RangeError> {
    validate(spec, target)?;

    let replacement = format!("{} {}", spec.name, target);
    let mut out = String::with_capacity(content.len());
    for line in content.split_inclusive('\n') {
        if !line.contains(spec.name) {
            out.push_str(line);
            continue;
        }
        let mut line = line.to_string();
        for k in spec.min..=spec.max {
            line = line.replace(&format!("{} {}", spec.name, k), &replacement);
        }
        out.push_str(&line);
    }
    Ok(out)
}
