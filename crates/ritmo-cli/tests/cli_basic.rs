//! Basic CLI E2E tests.
//!
//! Each test runs the built `ritmo` binary against its own temporary data
//! directory.

use std::process::Command;

use tempfile::TempDir;

struct Cli {
    dir: TempDir,
}

impl Cli {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Run a CLI command and return (stdout, stderr, exit code).
    fn run(&self, args: &[&str]) -> (String, String, i32) {
        let output = Command::new(env!("CARGO_BIN_EXE_ritmo"))
            .args(args)
            .env("RITMO_DATA_DIR", self.dir.path())
            .env_remove("RITMO_LOG")
            .output()
            .expect("Failed to execute CLI command");

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let code = output.status.code().unwrap_or(-1);
        (stdout, stderr, code)
    }

    fn success(&self, args: &[&str]) -> String {
        let (stdout, stderr, code) = self.run(args);
        assert_eq!(code, 0, "command {args:?} failed: {stderr}");
        stdout
    }

    fn json(&self, args: &[&str]) -> serde_json::Value {
        let mut with_flag = args.to_vec();
        with_flag.push("--json");
        let stdout = self.success(&with_flag);
        serde_json::from_str(&stdout).expect("Failed to parse JSON output")
    }
}

#[test]
fn test_analytics_require_onboarding() {
    let cli = Cli::new();
    let (_, stderr, code) = cli.run(&["status"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"), "{stderr}");
    assert!(stderr.contains("onboard"), "{stderr}");
}

#[test]
fn test_healthy_week_end_to_end() {
    let cli = Cli::new();
    cli.success(&["onboard", "--days", "5", "--contacts", "10"]);
    cli.success(&["log", "add", "--contacts", "40"]);
    cli.success(&["log", "add", "--contacts", "5", "--sales", "1"]);

    let status = cli.json(&["status"]);
    assert_eq!(status["rhythm"]["status"], "HEALTHY");
    assert_eq!(status["rhythm"]["totals"]["contacts"], 45);
    assert_eq!(status["rhythm"]["totals"]["sales"], 1);

    let energy = cli.json(&["energy"]);
    assert_eq!(energy["energy"]["total"], 53);
    assert_eq!(energy["checkedIn"], false);

    let targets = cli.json(&["targets"]);
    assert_eq!(targets["targets"]["contacts"], 9);
    assert_eq!(targets["label"], "-10%");
}

#[test]
fn test_checkin_changes_targets() {
    let cli = Cli::new();
    cli.success(&["onboard"]);
    cli.success(&["checkin", "--sleep", "8", "--rested", "energized", "--breakfast"]);

    let energy = cli.json(&["energy"]);
    assert_eq!(energy["energy"]["physical"], 110);
    assert_eq!(energy["energy"]["total"], 84);
    assert_eq!(energy["band"], "high");
    assert_eq!(energy["planLabel"], "Morning");
    assert_eq!(energy["plan"][0]["startHour"], 8);
    assert_eq!(energy["plan"][0]["kind"], "HEAVY_FOCUS");

    let targets = cli.json(&["targets"]);
    assert_eq!(targets["targets"]["contacts"], 11);
    assert_eq!(targets["label"], "+10%");

    let checkout = cli.json(&["checkout", "--battery", "30", "--drainer", "traffic"]);
    assert_eq!(checkout["energy"]["emotional"]["batteryLevel"], 30);
}

#[test]
fn test_checkout_without_checkin_is_skipped() {
    let cli = Cli::new();
    let stdout = cli.success(&["checkout", "--battery", "50"]);
    assert!(stdout.contains("not saved"), "{stdout}");
    assert_eq!(cli.json(&["log", "list"]), serde_json::json!([]));
}

#[test]
fn test_log_set_and_show_past_day() {
    let cli = Cli::new();
    cli.success(&["log", "set", "--date", "2020-01-01", "--contacts", "5"]);
    cli.success(&["log", "set", "--date", "2020-01-01", "--sales", "2"]);

    let log = cli.json(&["log", "show", "--date", "2020-01-01"]);
    assert_eq!(log["date"], "2020-01-01");
    assert_eq!(log["contacts"], 5);
    assert_eq!(log["sales"], 2);

    let (_, _, code) = cli.run(&["log", "show", "--date", "01/01/2020"]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_get_set_reset() {
    let cli = Cli::new();
    assert_eq!(cli.success(&["config", "get", "daysPerWeek"]).trim(), "5");

    cli.success(&["config", "set", "dailyTargets.contacts", "15"]);
    assert_eq!(
        cli.success(&["config", "get", "dailyTargets.contacts"]).trim(),
        "15"
    );

    let (_, stderr, code) = cli.run(&["config", "set", "daysPerWeek", "9"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    let (_, _, code) = cli.run(&["config", "get", "noSuchKey"]);
    assert_eq!(code, 1);

    cli.success(&["onboard"]);
    cli.success(&["config", "reset"]);
    assert_eq!(cli.success(&["config", "get", "isOnboarded"]).trim(), "false");
}

#[test]
fn test_plan_follows_peak_productivity() {
    let cli = Cli::new();
    cli.success(&["onboard", "--peak", "night"]);

    let dashboard = cli.json(&["dashboard"]);
    assert_eq!(dashboard["planLabel"], "Afternoon");
    assert_eq!(dashboard["plan"][2]["startHour"], 14);
    assert_eq!(dashboard["plan"][2]["endHour"], 17);

    let text = cli.success(&["energy"]);
    assert!(text.contains("14h-17h"), "{text}");
}

#[test]
fn test_view_flow() {
    let cli = Cli::new();
    let view = cli.json(&["view", "--event", "onboarding_completed"]);
    assert_eq!(view["initial"], "onboarding");
    assert_eq!(view["current"], "morning_checkin");

    let (_, stderr, code) = cli.run(&["view", "--event", "navigate:goals"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));

    cli.success(&["onboard"]);
    cli.success(&["checkin", "--sleep", "6", "--rested", "ok"]);
    let view = cli.json(&["view", "--event", "navigate:focus_mode", "--event", "timer_finished"]);
    assert_eq!(view["initial"], "dashboard");
    assert_eq!(view["transitions"], serde_json::json!(["focus_mode", "dashboard"]));
}
