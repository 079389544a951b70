/// One numbered define the tool knows how to set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacroSpec {
    /// Option name as spelled on the command line (long form).
    pub key: &'static str,
    /// Short flag.
    pub flag: char,
    /// Text that precedes the value in the header, e.g. `#define SE_IFFT_TYPE`.
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    /// Meaning of each legal value, indexed from `min`.
    pub labels: &'static [&'static str],
    /// Completes "Need to choose ..." when the option is missing.
    pub missing: &'static str,
}

impl MacroSpec {
    pub fn contains(
        &self,
        value: i64,
    ) -> bool {
        self.min <= value && value <= self.max
    }

    /// Human-readable meaning of `value`, if it is a legal one.
    pub fn label(
        &self,
        value: i64,
    ) -> Option<&'static str> {
        if !self.contains(value) {
            return None;
        }
        usize::try_from(value - self.min)
            .ok()
            .and_then(|idx| self.labels.get(idx).copied())
    }
}

/// Supported defines, in the order they are checked and rewritten.
pub static DEFINES: [MacroSpec; 5] = [
    MacroSpec {
        key: "ifft",
        flag: 'i',
        name: "#define SE_IFFT_TYPE",
        min: 0,
        max: 2,
        labels: &[
            "compute \"on-the-fly\"",
            "load",
            "compute \"one-shot\" (not yet supported)",
        ],
        missing: "an ifft option",
    },
    MacroSpec {
        key: "ntt",
        flag: 'n',
        name: "#define SE_NTT_TYPE",
        min: 0,
        max: 3,
        labels: &[
            "compute \"on-the-fly\"",
            "compute \"one-shot\"",
            "load",
            "load fast",
        ],
        missing: "an ntt option",
    },
    MacroSpec {
        key: "index_map",
        flag: 'm',
        name: "#define SE_INDEX_MAP_TYPE",
        min: 0,
        max: 4,
        labels: &[
            "compute \"on-the-fly\"",
            "compute persistent",
            "load",
            "load persistent",
            "load persistent for symmetric, load for asymmetric",
        ],
        missing: "an index_map option",
    },
    MacroSpec {
        key: "sk",
        flag: 's',
        name: "#define SE_SK_TYPE",
        min: 0,
        max: 2,
        labels: &[
            "not persistent",
            "persistent across primes",
            "persistent",
        ],
        missing: "an sk option",
    },
    MacroSpec {
        key: "data_load",
        flag: 'd',
        name: "#define SE_DATA_LOAD_TYPE",
        min: 0,
        max: 2,
        labels: &[
            "from file",
            "copy from headers into separate buffer",
            "load from code directly (not supported)",
        ],
        missing: "a data load option",
    },
];

/// Renders the `--list` overview of every define and its values.
pub fn describe_all() -> String {
    let mut out = String::new();
    for spec in &DEFINES {
        out.push_str(&format!(
            "-{}, --{} <{}..={}>  {}\n",
            spec.flag, spec.key, spec.min, spec.max, spec.name
        ));
        for value in spec.min..=spec.max {
            let label = spec.label(value).unwrap_or("");
            out.push_str(&format!("    {value} = {label}\n"));
        }
    }
    out
}
