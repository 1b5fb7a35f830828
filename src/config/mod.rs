use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::host::ObjectKind;
use crate::property::SkipList;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Clipboard configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfigData {
    /// Extra member names never captured, on top of the built-in set
    #[serde(default)]
    pub capture_skip: Vec<String>,

    /// Extra member names never written back on paste
    #[serde(default)]
    pub replay_skip: Vec<String>,

    /// Object kinds that accept pasted modifiers
    #[serde(default = "ObjectKind::default_paste_targets")]
    pub paste_targets: Vec<ObjectKind>,
}

impl Default for ClipboardConfigData {
    fn default() -> Self {
        Self {
            capture_skip: Vec::new(),
            replay_skip: Vec::new(),
            paste_targets: ObjectKind::default_paste_targets(),
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct ClipboardConfig {
    /// The persisted configuration data
    pub data: ClipboardConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            data: ClipboardConfigData::default(),
            config_path: get_config_path(),
            dirty: false,
        }
    }
}

impl ClipboardConfig {
    pub fn capture_skip(&self) -> SkipList {
        SkipList::for_capture().with_names(self.data.capture_skip.iter().cloned())
    }

    pub fn replay_skip(&self) -> SkipList {
        SkipList::for_replay().with_names(self.data.replay_skip.iter().cloned())
    }

    pub fn accepts_paste(&self, kind: ObjectKind) -> bool {
        self.data.paste_targets.contains(&kind)
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to change which object kinds accept pasted modifiers
#[derive(Message)]
pub struct SetPasteTargetsRequest {
    pub targets: Vec<ObjectKind>,
}

/// Get the path to the config file (platform-appropriate location)
fn get_config_path() -> PathBuf {
    crate::paths::config_file()
}

/// Result of loading config from disk
struct LoadConfigResult {
    data: ClipboardConfigData,
    /// Error message if config was reset to defaults due to an error
    reset_reason: Option<String>,
}

/// Load configuration from `config_path`, falling back to defaults
fn load_config_from(config_path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if config_path.exists() {
        match std::fs::read_to_string(config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        ClipboardConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    ClipboardConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (ClipboardConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Save configuration to disk
fn save_config(config: &ClipboardConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<ClipboardConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config_from(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = result.reset_reason {
        warn!("Config reset to defaults: {}", reason);
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<ClipboardConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to update the paste allow-list
fn set_paste_targets_system(
    mut events: MessageReader<SetPasteTargetsRequest>,
    mut config: ResMut<ClipboardConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        let mut seen = HashSet::new();
        config.data.paste_targets = event
            .targets
            .iter()
            .copied()
            .filter(|kind| seen.insert(*kind))
            .collect();
        config.dirty = true;
        save_events.write(SaveConfigRequest);
        info!("Paste targets set to {:?}", config.data.paste_targets);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipboardConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetPasteTargetsRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_paste_targets_system.run_if(on_message::<SetPasteTargetsRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_data_default() {
        let data = ClipboardConfigData::default();
        assert!(data.capture_skip.is_empty());
        assert!(data.replay_skip.is_empty());
        assert_eq!(data.paste_targets, ObjectKind::default_paste_targets());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let data: ClipboardConfigData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, ClipboardConfigData::default());

        let data: ClipboardConfigData =
            serde_json::from_str(r#"{"paste_targets": ["MESH"], "replay_skip": ["name"]}"#)
                .unwrap();
        assert_eq!(data.paste_targets, vec![ObjectKind::Mesh]);
        assert_eq!(data.replay_skip, vec!["name".to_string()]);
    }

    #[test]
    fn test_skip_lists_extend_builtin_sets() {
        let config = ClipboardConfig {
            data: ClipboardConfigData {
                capture_skip: vec!["show_expanded".to_string()],
                replay_skip: vec!["name".to_string()],
                paste_targets: vec![ObjectKind::Mesh],
            },
            config_path: PathBuf::from("unused.json"),
            dirty: false,
        };

        let capture = config.capture_skip();
        assert!(capture.contains("show_expanded"));
        assert!(capture.contains("rna_type"));

        let replay = config.replay_skip();
        assert!(replay.contains("name"));
        assert!(replay.contains("active"));

        assert!(config.accepts_paste(ObjectKind::Mesh));
        assert!(!config.accepts_paste(ObjectKind::Curve));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("config.json"));
        assert_eq!(result.data, ClipboardConfigData::default());
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_load_corrupt_file_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = load_config_from(&path);
        assert_eq!(result.data, ClipboardConfigData::default());
        assert!(
            result
                .reset_reason
                .is_some_and(|r| r.starts_with("Configuration file was corrupted"))
        );
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClipboardConfig {
            data: ClipboardConfigData {
                capture_skip: vec!["execution_time".to_string()],
                replay_skip: Vec::new(),
                paste_targets: vec![ObjectKind::Mesh, ObjectKind::Lattice],
            },
            config_path: dir.path().join("config.json"),
            dirty: true,
        };
        save_config(&config);

        let result = load_config_from(&config.config_path);
        assert_eq!(result.data, config.data);
        assert!(result.reset_reason.is_none());
    }

    #[test]
    fn test_set_paste_targets_saves() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut app = App::new();
        app.insert_resource(ClipboardConfig {
            data: ClipboardConfigData::default(),
            config_path: path.clone(),
            dirty: false,
        })
        .init_resource::<ConfigResetNotification>()
        .add_message::<SaveConfigRequest>()
        .add_message::<SetPasteTargetsRequest>()
        .add_systems(
            Update,
            (set_paste_targets_system, save_config_system).chain(),
        );

        app.world_mut().write_message(SetPasteTargetsRequest {
            targets: vec![ObjectKind::Mesh],
        });
        app.update();

        let config = app.world().resource::<ClipboardConfig>();
        assert_eq!(config.data.paste_targets, vec![ObjectKind::Mesh]);
        assert!(!config.dirty);
        assert_eq!(load_config_from(&path).data.paste_targets, vec![ObjectKind::Mesh]);
    }

    #[test]
    fn test_set_paste_targets_drops_repeated_kinds() {
        let dir = tempfile::tempdir().unwrap();

        let mut app = App::new();
        app.insert_resource(ClipboardConfig {
            data: ClipboardConfigData::default(),
            config_path: dir.path().join("config.json"),
            dirty: false,
        })
        .add_message::<SaveConfigRequest>()
        .add_message::<SetPasteTargetsRequest>()
        .add_systems(Update, set_paste_targets_system);

        app.world_mut().write_message(SetPasteTargetsRequest {
            targets: vec![ObjectKind::Mesh, ObjectKind::Curve, ObjectKind::Mesh],
        });
        app.update();

        let config = app.world().resource::<ClipboardConfig>();
        assert_eq!(
            config.data.paste_targets,
            vec![ObjectKind::Mesh, ObjectKind::Curve]
        );
    }
}
