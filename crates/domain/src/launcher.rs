use std::fmt;

/// Operating system families with their own app tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    MacOs,
    Linux,
}

impl OsFamily {
    /// The family of the running system, `None` when apps cannot be launched
    /// on it
    pub fn current() -> Option<Self> {
        if cfg!(target_os = "windows") {
            Some(Self::Windows)
        } else if cfg!(target_os = "macos") {
            Some(Self::MacOs)
        } else if cfg!(target_os = "linux") {
            Some(Self::Linux)
        } else {
            None
        }
    }
}

/// How an application should be started. Every variant carries its own
/// argument list so user text never ends up inside a shell command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchCommand {
    /// Start an executable directly
    Program { program: String, args: Vec<String> },
    /// Hand a URI, protocol handler or app name to the OS opener. On
    /// Windows this is ShellExecute, so no command interpreter is involved.
    Uri(String),
    /// Start through a shell builtin, e.g. `start` on Windows
    Shell { program: String, args: Vec<String> },
}

impl LaunchCommand {
    fn program(program: &str, args: &[&str]) -> Self {
        Self::Program {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn windows_start(target: &str) -> Self {
        Self::Shell {
            program: "cmd".into(),
            args: vec!["/C".into(), "start".into(), "".into(), target.into()],
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Program { program, args } | Self::Shell { program, args } => {
                write!(f, "{}", program)?;
                for arg in args {
                    if arg.is_empty() || arg.contains(' ') {
                        write!(f, " \"{}\"", arg)?;
                    } else {
                        write!(f, " {}", arg)?;
                    }
                }
                Ok(())
            }
            Self::Uri(uri) => write!(f, "open {}", uri),
        }
    }
}

enum AppTarget {
    /// Executable name or absolute path
    Exe(&'static str),
    Uri(&'static str),
    /// `open -a <app>` on macOS
    MacApp(&'static str),
    /// Executable with fixed arguments
    ExeWithArgs(&'static str, &'static [&'static str]),
}

const WINDOWS_APPS: &[(&str, AppTarget)] = &[
    ("calculator", AppTarget::Exe("calc.exe")),
    ("notepad", AppTarget::Exe("notepad.exe")),
    ("paint", AppTarget::Exe("mspaint.exe")),
    ("word", AppTarget::Exe("winword.exe")),
    ("excel", AppTarget::Exe("excel.exe")),
    ("powerpoint", AppTarget::Exe("powerpnt.exe")),
    (
        "chrome",
        AppTarget::Exe(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
    ),
    (
        "firefox",
        AppTarget::Exe(r"C:\Program Files\Mozilla Firefox\firefox.exe"),
    ),
    ("edge", AppTarget::Exe("msedge.exe")),
    (
        "whatsapp",
        AppTarget::Exe(r"C:\Users\%USERNAME%\AppData\Local\WhatsApp\WhatsApp.exe"),
    ),
    ("youtube", AppTarget::Uri("https://www.youtube.com/")),
    (
        "spotify",
        AppTarget::Exe(r"C:\Users\%USERNAME%\AppData\Roaming\Spotify\Spotify.exe"),
    ),
    ("mail", AppTarget::Exe("outlook.exe")),
    ("file explorer", AppTarget::Exe("explorer.exe")),
    ("settings", AppTarget::Uri("ms-settings:")),
    ("camera", AppTarget::Uri("microsoft.windows.camera:")),
    ("calendar", AppTarget::Uri("outlookcal:")),
    ("photos", AppTarget::Uri("ms-photos:")),
];

const MAC_APPS: &[(&str, AppTarget)] = &[
    ("calculator", AppTarget::MacApp("Calculator")),
    ("notes", AppTarget::MacApp("Notes")),
    ("safari", AppTarget::MacApp("Safari")),
    ("chrome", AppTarget::MacApp("Google Chrome")),
    ("firefox", AppTarget::MacApp("Firefox")),
    ("whatsapp", AppTarget::MacApp("WhatsApp")),
    ("youtube", AppTarget::Uri("https://www.youtube.com/")),
    ("spotify", AppTarget::MacApp("Spotify")),
    ("mail", AppTarget::MacApp("Mail")),
    ("finder", AppTarget::MacApp("Finder")),
    ("system preferences", AppTarget::MacApp("System Preferences")),
    ("camera", AppTarget::MacApp("Photo Booth")),
    ("calendar", AppTarget::MacApp("Calendar")),
    ("photos", AppTarget::MacApp("Photos")),
];

const LINUX_APPS: &[(&str, AppTarget)] = &[
    ("calculator", AppTarget::Exe("gnome-calculator")),
    ("text editor", AppTarget::Exe("gedit")),
    ("firefox", AppTarget::Exe("firefox")),
    ("chrome", AppTarget::Exe("google-chrome")),
    ("chromium", AppTarget::Exe("chromium-browser")),
    ("nautilus", AppTarget::Exe("nautilus")),
    ("files", AppTarget::Exe("nautilus")),
    ("file explorer", AppTarget::Exe("nautilus")),
    ("settings", AppTarget::Exe("gnome-control-center")),
    ("terminal", AppTarget::Exe("gnome-terminal")),
    (
        "youtube",
        AppTarget::ExeWithArgs("firefox", &["https://www.youtube.com/"]),
    ),
];

fn app_table(os: OsFamily) -> &'static [(&'static str, AppTarget)] {
    match os {
        OsFamily::Windows => WINDOWS_APPS,
        OsFamily::MacOs => MAC_APPS,
        OsFamily::Linux => LINUX_APPS,
    }
}

/// Normalizes a spoken app name for lookup
pub fn normalize_app_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Finds the command that starts `name` on `os`.
///
/// Names missing from the table still get a best guess: the OS opener on
/// Windows, `open -a <name>` on macOS and the name as an executable on Linux.
/// Returns `None` only for an empty name.
pub fn resolve_launch_command(name: &str, os: OsFamily) -> Option<LaunchCommand> {
    let name = normalize_app_name(name);
    if name.is_empty() {
        return None;
    }

    let known = app_table(os)
        .iter()
        .find(|(app, _)| *app == name)
        .map(|(_, target)| target);

    let command = match (os, known) {
        (_, Some(AppTarget::Uri(uri))) => LaunchCommand::Uri(uri.to_string()),
        (OsFamily::Windows, Some(AppTarget::Exe(exe))) => LaunchCommand::windows_start(exe),
        (_, Some(AppTarget::Exe(exe))) => LaunchCommand::program(exe, &[]),
        (_, Some(AppTarget::MacApp(app))) => LaunchCommand::program("open", &["-a", *app]),
        (_, Some(AppTarget::ExeWithArgs(exe, args))) => LaunchCommand::program(exe, args),
        // Spoken names never reach `cmd`, which would interpret `&` or `|`
        (OsFamily::Windows, None) => LaunchCommand::Uri(name),
        (OsFamily::MacOs, None) => LaunchCommand::program("open", &["-a", name.as_str()]),
        (OsFamily::Linux, None) => LaunchCommand::program(&name, &[]),
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_apps_per_os() {
        assert_eq!(
            resolve_launch_command("Calculator ", OsFamily::Linux).unwrap(),
            LaunchCommand::program("gnome-calculator", &[])
        );
        assert_eq!(
            resolve_launch_command("chrome", OsFamily::MacOs).unwrap(),
            LaunchCommand::program("open", &["-a", "Google Chrome"])
        );
        assert_eq!(
            resolve_launch_command("notepad", OsFamily::Windows).unwrap(),
            LaunchCommand::windows_start("notepad.exe")
        );
        assert_eq!(
            resolve_launch_command("settings", OsFamily::Windows).unwrap(),
            LaunchCommand::Uri("ms-settings:".into())
        );
        assert_eq!(
            resolve_launch_command("youtube", OsFamily::Linux).unwrap(),
            LaunchCommand::program("firefox", &["https://www.youtube.com/"])
        );
    }

    #[test]
    fn unknown_apps_fall_back_to_a_best_guess() {
        for os in &[OsFamily::Windows, OsFamily::MacOs, OsFamily::Linux] {
            let command = resolve_launch_command("Blender", *os)
                .expect("Expected a fallback command for unknown app");
            assert!(!command.to_string().is_empty());
            assert!(command.to_string().contains("blender"));
        }
        assert_eq!(
            resolve_launch_command("blender", OsFamily::MacOs).unwrap(),
            LaunchCommand::program("open", &["-a", "blender"])
        );
    }

    #[test]
    fn user_text_stays_a_single_argument() {
        let command = resolve_launch_command("evil; rm -rf ~", OsFamily::MacOs).unwrap();
        match command {
            LaunchCommand::Program { program, args } => {
                assert_eq!(program, "open");
                assert_eq!(args, vec!["-a".to_string(), "evil; rm -rf ~".to_string()]);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_windows_apps_bypass_the_command_interpreter() {
        assert_eq!(
            resolve_launch_command("a&calc", OsFamily::Windows).unwrap(),
            LaunchCommand::Uri("a&calc".into())
        );
        assert_eq!(
            resolve_launch_command("Blender", OsFamily::Windows).unwrap(),
            LaunchCommand::Uri("blender".into())
        );
    }

    #[test]
    fn empty_names_are_rejected() {
        assert!(resolve_launch_command("   ", OsFamily::Linux).is_none());
    }

    #[test]
    fn displays_commands() {
        assert_eq!(
            LaunchCommand::windows_start("calc.exe").to_string(),
            "cmd /C start \"\" calc.exe"
        );
        assert_eq!(
            LaunchCommand::Uri("ms-photos:".into()).to_string(),
            "open ms-photos:"
        );
    }
}
