//! Test environment builder for isolated Folio testing.
//!
//! Provides `TestEnv` - a temp project directory and a temp home directory,
//! plus helpers to run the `folio` binary inside them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{PROJECTS_JSON, SITE_JSON};

/// Environment variables that would leak host settings into a run
const HOST_ENV: &[&str] = &[
    "FOLIO_CONTENT_DIR",
    "FOLIO_OUT_DIR",
    "FOLIO_BASE_PATH",
    "FOLIO_HASH_ROUTES",
    "FOLIO_VERBOSITY",
    "CI",
    "GITHUB_ACTIONS",
    "LANG",
    "LC_CTYPE",
];

/// Result of running a Folio CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    folio_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Project with the default fixture documents under `content/`
    pub fn with_fixture_content() -> Self {
        Self::builder().build()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Run folio from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = self.command(cwd);
        cmd.args(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute folio");
        output_to_result(output)
    }

    /// Bare command with the isolated home applied, for spawning
    pub fn command(&self, cwd: &Path) -> Command {
        let home = self.home_dir.path();
        let mut cmd = Command::new(&self.folio_bin);
        cmd.current_dir(cwd)
            .env("HOME", home)
            .env("USERPROFILE", home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("LC_ALL", "C")
            .env("NO_COLOR", "1");
        for key in HOST_ENV {
            cmd.env_remove(key);
        }
        cmd
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn remove_file(&self, relative: &str) {
        std::fs::remove_file(self.project_path(relative)).expect("Failed to remove file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    content_dir: String,
    site: Option<String>,
    projects: Option<String>,
    project_config: Option<String>,
    home_config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        Self {
            content_dir: "content".to_string(),
            site: Some(SITE_JSON.to_string()),
            projects: Some(PROJECTS_JSON.to_string()),
            project_config: None,
            home_config: None,
        }
    }

    /// Write the documents somewhere other than `content/`
    pub fn with_content_dir(mut self, dir: &str) -> Self {
        self.content_dir = dir.to_string();
        self
    }

    pub fn with_site(mut self, json: &str) -> Self {
        self.site = Some(json.to_string());
        self
    }

    pub fn with_projects(mut self, json: &str) -> Self {
        self.projects = Some(json.to_string());
        self
    }

    pub fn without_site(mut self) -> Self {
        self.site = None;
        self
    }

    /// Project `folio.toml`
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// User config (`$XDG_CONFIG_HOME/folio/config.toml`)
    pub fn with_home_config(mut self, toml: &str) -> Self {
        self.home_config = Some(toml.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let project_root = tempfile::tempdir().expect("Failed to create project dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");

        // Anchor project-root discovery inside the temp dir
        std::fs::create_dir_all(project_root.path().join(".git")).unwrap();

        let content = project_root.path().join(&self.content_dir);
        std::fs::create_dir_all(&content).unwrap();
        if let Some(site) = &self.site {
            std::fs::write(content.join("site.json"), site).unwrap();
        }
        if let Some(projects) = &self.projects {
            std::fs::write(content.join("projects.json"), projects).unwrap();
        }
        if let Some(config) = &self.project_config {
            std::fs::write(project_root.path().join("folio.toml"), config).unwrap();
        }
        if let Some(config) = &self.home_config {
            let dir = home_dir.path().join(".config/folio");
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("config.toml"), config).unwrap();
        }

        TestEnv {
            project_root,
            home_dir,
            folio_bin: PathBuf::from(env!("CARGO_BIN_EXE_folio")),
        }
    }
}

impl Default for TestEnvBuilder {
    fn default() -> Self {
        Self::new()
    }
}
