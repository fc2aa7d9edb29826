use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Temporary directory holding one tickets file.
pub struct TkWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl TkWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self { temp_dir, root }
    }

    pub fn tickets_path(&self) -> PathBuf {
        self.root.join("tickets.json")
    }

    pub fn write_tickets(&self, content: &str) {
        std::fs::write(self.tickets_path(), content).expect("write tickets file");
    }

    pub fn read_tickets(&self) -> serde_json::Value {
        let raw = std::fs::read_to_string(self.tickets_path()).expect("read tickets file");
        serde_json::from_str(&raw).expect("tickets file is JSON")
    }
}

pub struct TkOutput {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl TkOutput {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}

/// Run `tk` inside the workspace with its tickets file selected.
pub fn run_tk<I, S>(workspace: &TkWorkspace, args: I, label: &str) -> TkOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let mut cmd = Command::cargo_bin("tk").expect("tk binary");
    cmd.current_dir(&workspace.root)
        .env_remove("TICKETS_FILE")
        .env_remove("TICKETS_CONFIG")
        .env_remove("TICKETS_BIND")
        .env("RUST_LOG", "error")
        .arg("--file")
        .arg(workspace.tickets_path())
        .args(args);

    let output = cmd.output().expect("run tk");
    let result = TkOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    if !result.status.success() {
        eprintln!("[{label}] tk failed\nstdout:\n{}\nstderr:\n{}", result.stdout, result.stderr);
    }
    result
}
