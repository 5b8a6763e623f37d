use anyhow::{anyhow, Context};
use savin_domain::{LaunchCommand, OsFamily};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Mutex;
use tracing::info;

/// Side effects on the user's desktop. Every operation only asks the OS to
/// do something and returns as soon as the request was accepted.
pub trait IDesktop: Send + Sync {
    fn launch(&self, command: &LaunchCommand) -> anyhow::Result<()>;
    /// Opens a file with the default application for its type
    fn open_path(&self, path: &Path) -> anyhow::Result<()>;
    fn notify(&self, title: &str, message: &str) -> anyhow::Result<()>;
}

/// A process to spawn, with environment variables passed next to the
/// arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSpec {
    pub program: String,
    pub args: Vec<String>,
    pub envs: Vec<(String, String)>,
}

impl ProcessSpec {
    fn new(program: &str, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            envs: Vec::new(),
        }
    }
}

const WINDOWS_TOAST_SCRIPT: &str = "Add-Type -AssemblyName System.Windows.Forms; \
    $n = New-Object System.Windows.Forms.NotifyIcon; \
    $n.Icon = [System.Drawing.SystemIcons]::Information; \
    $n.Visible = $true; \
    $n.ShowBalloonTip(10000, $env:SAVIN_NOTIFY_TITLE, $env:SAVIN_NOTIFY_MESSAGE, 'Info'); \
    Start-Sleep -Seconds 10; \
    $n.Dispose()";

/// The command showing a notification on `os`. User text is passed as a
/// quoted AppleScript string on macOS and through the environment on Windows.
pub fn notification_command(os: OsFamily, title: &str, message: &str) -> ProcessSpec {
    match os {
        OsFamily::Linux => {
            ProcessSpec::new("notify-send", vec![title.to_string(), message.to_string()])
        }
        OsFamily::MacOs => {
            let script = format!(
                "display notification {} with title {}",
                applescript_string(message),
                applescript_string(title)
            );
            ProcessSpec::new("osascript", vec!["-e".into(), script])
        }
        OsFamily::Windows => {
            let mut spec = ProcessSpec::new(
                "powershell",
                vec![
                    "-NoProfile".into(),
                    "-WindowStyle".into(),
                    "Hidden".into(),
                    "-Command".into(),
                    WINDOWS_TOAST_SCRIPT.into(),
                ],
            );
            spec.envs = vec![
                ("SAVIN_NOTIFY_TITLE".into(), title.into()),
                ("SAVIN_NOTIFY_MESSAGE".into(), message.into()),
            ];
            spec
        }
    }
}

fn applescript_string(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Desktop of the machine the server runs on
pub struct RealDesktop {}

impl RealDesktop {
    fn spawn_detached(spec: &ProcessSpec) -> anyhow::Result<()> {
        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .envs(spec.envs.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start `{}`", spec.program))?;
        // Reap the child in the background so it does not linger as a zombie
        std::thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

impl IDesktop for RealDesktop {
    fn launch(&self, command: &LaunchCommand) -> anyhow::Result<()> {
        info!("Executing command: {}", command);
        match command {
            LaunchCommand::Program { program, args } | LaunchCommand::Shell { program, args } => {
                Self::spawn_detached(&ProcessSpec::new(program, args.clone()))
            }
            LaunchCommand::Uri(uri) => {
                open::that_detached(uri).with_context(|| format!("Failed to open {}", uri))
            }
        }
    }

    fn open_path(&self, path: &Path) -> anyhow::Result<()> {
        open::that_detached(path).with_context(|| format!("Failed to open {}", path.display()))
    }

    fn notify(&self, title: &str, message: &str) -> anyhow::Result<()> {
        let os = OsFamily::current()
            .ok_or_else(|| anyhow!("Notifications are not supported on this system"))?;
        Self::spawn_detached(&notification_command(os, title, message))
    }
}

/// Desktop that only records what it was asked to do
#[derive(Default)]
pub struct RecordingDesktop {
    pub launches: Mutex<Vec<LaunchCommand>>,
    pub opened_paths: Mutex<Vec<PathBuf>>,
    pub notifications: Mutex<Vec<(String, String)>>,
    /// When set every operation fails after being recorded
    pub fail: bool,
}

impl RecordingDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn result(&self) -> anyhow::Result<()> {
        if self.fail {
            Err(anyhow!("Desktop is unavailable"))
        } else {
            Ok(())
        }
    }
}

impl IDesktop for RecordingDesktop {
    fn launch(&self, command: &LaunchCommand) -> anyhow::Result<()> {
        self.launches.lock().unwrap().push(command.clone());
        self.result()
    }

    fn open_path(&self, path: &Path) -> anyhow::Result<()> {
        self.opened_paths.lock().unwrap().push(path.to_path_buf());
        self.result()
    }

    fn notify(&self, title: &str, message: &str) -> anyhow::Result<()> {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), message.to_string()));
        self.result()
    }
}
