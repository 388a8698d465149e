use std::fs;
use std::path::Path;

/// Write the sample campaign used across CLI tests:
///
/// - fuzzer_a: t1 {1,3}, t2 {1,2}
/// - fuzzer_b: t1 {1,2}, t2 {1,2}
/// - fuzzer_c: t1 {1,2,3}, t2 {1,2,3}
/// - seeds:    seeds {1}
pub fn write_sample_campaign(root: &Path) {
    write_trial(root, "fuzzer_a", "t1", "1:4\n3:1\n2:0\n");
    write_trial(root, "fuzzer_a", "t2", "1:2\n2:7\n");
    write_trial(root, "fuzzer_b", "t1", "1:1\n2:1\n");
    write_trial(root, "fuzzer_b", "t2", "\n1:3\n2:9\n\n");
    write_trial(root, "fuzzer_c", "t1", "1:1\n2:1\n3:1\n");
    write_trial(root, "fuzzer_c", "t2", "3:5\n2:5\n1:5\n");
    write_trial(root, "seeds", "seeds", "1:1\n");
}

pub fn write_trial(root: &Path, approach: &str, trial: &str, body: &str) {
    let dir = root.join(approach);
    fs::create_dir_all(&dir).expect("create approach dir");
    fs::write(dir.join(trial), body).expect("write trial file");
}

/// Non-empty, trimmed output lines.
#[allow(dead_code)]
pub fn lines(out: &str) -> Vec<String> {
    out.lines().map(|l| l.trim().to_string()).filter(|l| !l.is_empty()).collect()
}
