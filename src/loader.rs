//! Loader collaborator: starts the application that handles a file kind.

use std::collections::HashMap;
use std::process::{Command, Stdio};

use crate::storage::LocalStorage;

/// Fire-and-forget application launcher.
pub trait Loader {
    /// Start `app` with `argument` (a device path). The outcome is not
    /// reported back.
    fn start(&self, app: &str, argument: &str);
}

/// Launches host commands configured per application name. The device path
/// argument is resolved to a host path before spawning.
pub struct CommandLoader {
    commands: HashMap<String, String>,
    storage: LocalStorage,
}

impl CommandLoader {
    pub fn new(commands: HashMap<String, String>, storage: LocalStorage) -> Self {
        Self { commands, storage }
    }

    /// Host command configured for `app`.
    pub fn command_for(&self, app: &str) -> Option<&str> {
        self.commands.get(app).map(String::as_str)
    }
}

impl Loader for CommandLoader {
    fn start(&self, app: &str, argument: &str) {
        let Some(program) = self.command_for(app) else {
            log::warn!("no command configured for app {}", app);
            return;
        };
        let target = self.storage.resolve(argument);
        match Command::new(program)
            .arg(&target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => log::info!(
                "started {} ({}) for {} as pid {}",
                app,
                program,
                target.display(),
                child.id()
            ),
            Err(e) => log::warn!("failed to start {} ({}): {}", app, program, e),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::Path;

    /// Loader that records every start request.
    #[derive(Default)]
    pub(crate) struct RecordingLoader {
        pub started: RefCell<Vec<(String, String)>>,
    }

    impl Loader for RecordingLoader {
        fn start(&self, app: &str, argument: &str) {
            self.started
                .borrow_mut()
                .push((app.to_string(), argument.to_string()));
        }
    }

    #[test]
    fn command_lookup_by_app_name() {
        let mut commands = HashMap::new();
        commands.insert("NFC".to_string(), "nfc-tool".to_string());
        let loader = CommandLoader::new(commands, LocalStorage::new(Path::new("/mnt/sd")));
        assert_eq!(loader.command_for("NFC"), Some("nfc-tool"));
        assert_eq!(loader.command_for("Infrared"), None);
    }

    #[test]
    fn unconfigured_app_is_ignored() {
        let loader = CommandLoader::new(HashMap::new(), LocalStorage::new(Path::new("/mnt/sd")));
        loader.start("Sub-GHz", "/any/subghz/saved/gate.sub");
    }

    #[test]
    fn missing_program_does_not_panic() {
        let mut commands = HashMap::new();
        commands.insert(
            "NFC".to_string(),
            "definitely-not-an-installed-program-1f3a".to_string(),
        );
        let loader = CommandLoader::new(commands, LocalStorage::new(Path::new("/mnt/sd")));
        loader.start("NFC", "/any/nfc/card.nfc");
    }

    #[test]
    fn recording_loader_records() {
        let loader = RecordingLoader::default();
        loader.start("NFC", "/any/nfc/card.nfc");
        assert_eq!(
            loader.started.borrow().as_slice(),
            &[("NFC".to_string(), "/any/nfc/card.nfc".to_string())]
        );
    }
}
