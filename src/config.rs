use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use serde::de::Deserializer;
use serde::Deserialize;

use crate::store::IdAllocation;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_NAME: &str = "contactdir";

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File the settings were read from, if any.
    pub config_path: Option<PathBuf>,
    /// Seed dataset replacing the bundled one.
    pub dataset: Option<PathBuf>,
    pub id_allocation: IdAllocation,
    pub keys: Keys,
    pub ui: UiConfig,
}

/// Expand ~ to home directory in paths
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = home::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

#[derive(Debug, Clone, Default)]
pub struct UiConfig {
    pub colors: UiColors,
}

#[derive(Debug, Clone)]
pub struct UiColors {
    pub border: RgbColor,
    pub selection_bg: RgbColor,
    pub selection_fg: RgbColor,
    pub separator: RgbColor,
    pub error: RgbColor,
    pub status_fg: RgbColor,
    pub status_bg: RgbColor,
}

impl Default for UiColors {
    fn default() -> Self {
        UiColorsFile::default().into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

// =============================================================================
// Key Bindings - Context-aware with multiple bindings per action
// =============================================================================

/// All key bindings organized by context
#[derive(Debug, Clone, Default)]
pub struct Keys {
    /// Keys live whenever no modal is open and the search input is not focused
    pub global: GlobalKeys,
    /// Keys for moving through and acting on the contact list
    pub list: ListKeys,
    /// Keys for search input mode
    pub search_input: SearchInputKeys,
    /// Keys for the add/edit form
    pub form: FormKeys,
    /// Keys for the read-only view modal
    pub view: ViewKeys,
}

#[derive(Debug, Clone)]
pub struct GlobalKeys {
    pub quit: Vec<String>,
    pub search: Vec<String>,
    pub add: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ListKeys {
    pub next: Vec<String>,
    pub prev: Vec<String>,
    pub page_down: Vec<String>,
    pub page_up: Vec<String>,
    pub view: Vec<String>,
    pub edit: Vec<String>,
    pub delete: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SearchInputKeys {
    pub cancel: Vec<String>,
    pub confirm: Vec<String>,
    pub next: Vec<String>,
    pub prev: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FormKeys {
    pub cancel: Vec<String>,
    pub submit: Vec<String>,
    pub next: Vec<String>,
    pub prev: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ViewKeys {
    pub close: Vec<String>,
}

// =============================================================================
// Default implementations
// =============================================================================

impl Default for GlobalKeys {
    fn default() -> Self {
        Self {
            quit: vec!["q".into()],
            search: vec!["/".into()],
            add: vec!["a".into(), "+".into()],
        }
    }
}

impl Default for ListKeys {
    fn default() -> Self {
        Self {
            next: vec!["j".into(), "Down".into()],
            prev: vec!["k".into(), "Up".into()],
            page_down: vec!["PageDown".into()],
            page_up: vec!["PageUp".into()],
            view: vec!["Enter".into(), "v".into()],
            edit: vec!["e".into()],
            delete: vec!["x".into(), "Delete".into()],
        }
    }
}

impl Default for SearchInputKeys {
    fn default() -> Self {
        Self {
            cancel: vec!["Escape".into()],
            confirm: vec!["Enter".into()],
            next: vec!["Down".into()],
            prev: vec!["Up".into()],
        }
    }
}

impl Default for FormKeys {
    fn default() -> Self {
        Self {
            cancel: vec!["Escape".into()],
            submit: vec!["Enter".into()],
            next: vec!["Tab".into(), "Down".into()],
            prev: vec!["Backtab".into(), "Up".into()],
        }
    }
}

impl Default for ViewKeys {
    fn default() -> Self {
        Self {
            close: vec!["Escape".into(), "q".into(), "Enter".into()],
        }
    }
}

// =============================================================================
// Serde deserialization types (support both single string and array)
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum KeyBinding {
    Single(String),
    Multiple(Vec<String>),
}

impl KeyBinding {
    fn into_vec(self) -> Vec<String> {
        match self {
            KeyBinding::Single(s) => vec![s],
            KeyBinding::Multiple(v) => v,
        }
    }
}

impl Default for KeyBinding {
    fn default() -> Self {
        KeyBinding::Multiple(vec![])
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct KeysFile {
    global: GlobalKeysFile,
    list: ListKeysFile,
    search_input: SearchInputKeysFile,
    form: FormKeysFile,
    view: ViewKeysFile,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GlobalKeysFile {
    quit: KeyBinding,
    search: KeyBinding,
    add: KeyBinding,
}

impl Default for GlobalKeysFile {
    fn default() -> Self {
        let defaults = GlobalKeys::default();
        Self {
            quit: KeyBinding::Multiple(defaults.quit),
            search: KeyBinding::Multiple(defaults.search),
            add: KeyBinding::Multiple(defaults.add),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ListKeysFile {
    next: KeyBinding,
    prev: KeyBinding,
    page_down: KeyBinding,
    page_up: KeyBinding,
    view: KeyBinding,
    edit: KeyBinding,
    delete: KeyBinding,
}

impl Default for ListKeysFile {
    fn default() -> Self {
        let defaults = ListKeys::default();
        Self {
            next: KeyBinding::Multiple(defaults.next),
            prev: KeyBinding::Multiple(defaults.prev),
            page_down: KeyBinding::Multiple(defaults.page_down),
            page_up: KeyBinding::Multiple(defaults.page_up),
            view: KeyBinding::Multiple(defaults.view),
            edit: KeyBinding::Multiple(defaults.edit),
            delete: KeyBinding::Multiple(defaults.delete),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SearchInputKeysFile {
    cancel: KeyBinding,
    confirm: KeyBinding,
    next: KeyBinding,
    prev: KeyBinding,
}

impl Default for SearchInputKeysFile {
    fn default() -> Self {
        let defaults = SearchInputKeys::default();
        Self {
            cancel: KeyBinding::Multiple(defaults.cancel),
            confirm: KeyBinding::Multiple(defaults.confirm),
            next: KeyBinding::Multiple(defaults.next),
            prev: KeyBinding::Multiple(defaults.prev),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct FormKeysFile {
    cancel: KeyBinding,
    submit: KeyBinding,
    next: KeyBinding,
    prev: KeyBinding,
}

impl Default for FormKeysFile {
    fn default() -> Self {
        let defaults = FormKeys::default();
        Self {
            cancel: KeyBinding::Multiple(defaults.cancel),
            submit: KeyBinding::Multiple(defaults.submit),
            next: KeyBinding::Multiple(defaults.next),
            prev: KeyBinding::Multiple(defaults.prev),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ViewKeysFile {
    close: KeyBinding,
}

impl Default for ViewKeysFile {
    fn default() -> Self {
        let defaults = ViewKeys::default();
        Self {
            close: KeyBinding::Multiple(defaults.close),
        }
    }
}

// =============================================================================
// Conversion from file types to runtime types
// =============================================================================

impl From<KeysFile> for Keys {
    fn from(file: KeysFile) -> Self {
        Self {
            global: file.global.into(),
            list: file.list.into(),
            search_input: file.search_input.into(),
            form: file.form.into(),
            view: file.view.into(),
        }
    }
}

impl From<GlobalKeysFile> for GlobalKeys {
    fn from(file: GlobalKeysFile) -> Self {
        Self {
            quit: file.quit.into_vec(),
            search: file.search.into_vec(),
            add: file.add.into_vec(),
        }
    }
}

impl From<ListKeysFile> for ListKeys {
    fn from(file: ListKeysFile) -> Self {
        Self {
            next: file.next.into_vec(),
            prev: file.prev.into_vec(),
            page_down: file.page_down.into_vec(),
            page_up: file.page_up.into_vec(),
            view: file.view.into_vec(),
            edit: file.edit.into_vec(),
            delete: file.delete.into_vec(),
        }
    }
}

impl From<SearchInputKeysFile> for SearchInputKeys {
    fn from(file: SearchInputKeysFile) -> Self {
        Self {
            cancel: file.cancel.into_vec(),
            confirm: file.confirm.into_vec(),
            next: file.next.into_vec(),
            prev: file.prev.into_vec(),
        }
    }
}

impl From<FormKeysFile> for FormKeys {
    fn from(file: FormKeysFile) -> Self {
        Self {
            cancel: file.cancel.into_vec(),
            submit: file.submit.into_vec(),
            next: file.next.into_vec(),
            prev: file.prev.into_vec(),
        }
    }
}

impl From<ViewKeysFile> for ViewKeys {
    fn from(file: ViewKeysFile) -> Self {
        Self {
            close: file.close.into_vec(),
        }
    }
}

// =============================================================================
// Key binding validation
// =============================================================================

/// Normalize a key binding string to a canonical form for collision detection.
/// Single characters preserve case (since 'E' means Shift+e, different from 'e').
/// Multi-character key names are case-insensitive (Enter, ENTER, enter are the same).
fn normalize_binding(binding: &str) -> String {
    let trimmed = binding.trim();
    if trimmed.chars().count() == 1 {
        trimmed.to_string()
    } else {
        match trimmed.to_ascii_lowercase().as_str() {
            "esc" => "escape".to_string(),
            "shift+tab" => "backtab".to_string(),
            "page_up" => "pageup".to_string(),
            "page_down" => "pagedown".to_string(),
            "del" => "delete".to_string(),
            other => other.to_string(),
        }
    }
}

/// Check for collisions within a single context
fn check_context_collisions(bindings: &[(&str, &[String])], context_name: &str) -> Result<()> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (action_name, keys) in bindings {
        for key in *keys {
            let normalized = normalize_binding(key);
            if normalized.is_empty() {
                continue;
            }
            if let Some(existing_action) = seen.get(&normalized) {
                bail!(
                    "key binding collision in [keys.{}]: '{}' is bound to both '{}' and '{}'",
                    context_name,
                    key,
                    existing_action,
                    action_name
                );
            }
            seen.insert(normalized, action_name);
        }
    }

    Ok(())
}

/// Validate all key bindings for collisions within each context
fn validate_key_bindings(keys: &Keys) -> Result<()> {
    // Global keys are live together with the list keys
    check_context_collisions(
        &[
            ("global.quit", &keys.global.quit),
            ("global.search", &keys.global.search),
            ("global.add", &keys.global.add),
            ("next", &keys.list.next),
            ("prev", &keys.list.prev),
            ("page_down", &keys.list.page_down),
            ("page_up", &keys.list.page_up),
            ("view", &keys.list.view),
            ("edit", &keys.list.edit),
            ("delete", &keys.list.delete),
        ],
        "list",
    )?;

    check_context_collisions(
        &[
            ("cancel", &keys.search_input.cancel),
            ("confirm", &keys.search_input.confirm),
            ("next", &keys.search_input.next),
            ("prev", &keys.search_input.prev),
        ],
        "search_input",
    )?;

    check_context_collisions(
        &[
            ("cancel", &keys.form.cancel),
            ("submit", &keys.form.submit),
            ("next", &keys.form.next),
            ("prev", &keys.form.prev),
        ],
        "form",
    )?;

    check_context_collisions(&[("close", &keys.view.close)], "view")?;

    Ok(())
}

// =============================================================================
// Config file structure
// =============================================================================

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    dataset: Option<PathBuf>,
    id_allocation: Option<String>,
    keys: KeysFile,
    ui: UiFile,
}

fn config_root() -> Result<PathBuf> {
    let base = BaseDirs::new().context("unable to determine base directories")?;
    let dir = base.config_dir().join(APP_NAME);
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_root()?.join(CONFIG_FILE_NAME))
}

/// Load settings from `explicit`, or from the default location. A missing
/// default file means built-in defaults; a missing explicit file is an error.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("configuration file not found at {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = config_path()?;
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read configuration file at {}", path.display()))?;

    parse(&raw, &path)
}

/// Build a `Config` from TOML text read from `path`.
pub fn parse(raw: &str, path: &Path) -> Result<Config> {
    let value: toml::Value = toml::from_str(raw)
        .with_context(|| format!("failed to parse {} as TOML", path.display()))?;

    for warning in unknown_key_warnings(&value) {
        eprintln!("warning: {}", warning);
    }

    let cfg_file: ConfigFile = value
        .try_into()
        .with_context(|| format!("failed to deserialize config from {}", path.display()))?;

    let id_allocation = match cfg_file.id_allocation.as_deref() {
        None => IdAllocation::default(),
        Some(raw) => raw.parse::<IdAllocation>()?,
    };

    let keys: Keys = cfg_file.keys.into();

    // Validate key bindings for collisions
    validate_key_bindings(&keys)?;

    Ok(Config {
        config_path: Some(path.to_path_buf()),
        dataset: cfg_file.dataset.map(|p| expand_tilde(&p)),
        id_allocation,
        keys,
        ui: cfg_file.ui.into(),
    })
}

// =============================================================================
// Unknown key warnings
// =============================================================================

fn unknown_key_warnings(value: &toml::Value) -> Vec<String> {
    let mut warnings = Vec::new();
    let Some(table) = value.as_table() else {
        return warnings;
    };

    unknown_in_table(
        value,
        "",
        &["dataset", "id_allocation", "keys", "ui"],
        &mut warnings,
    );

    if let Some(keys_val) = table.get("keys") {
        unknown_keys_section(keys_val, &mut warnings);
    }

    if let Some(ui_val) = table.get("ui") {
        unknown_in_table(ui_val, "ui.", &["colors"], &mut warnings);
        if let Some(colors) = ui_val.get("colors") {
            unknown_in_table(
                colors,
                "ui.colors.",
                &[
                    "border",
                    "selection_bg",
                    "selection_fg",
                    "separator",
                    "error",
                    "status_fg",
                    "status_bg",
                ],
                &mut warnings,
            );
        }
    }

    warnings
}

fn unknown_keys_section(value: &toml::Value, warnings: &mut Vec<String>) {
    unknown_in_table(
        value,
        "keys.",
        &["global", "list", "search_input", "form", "view"],
        warnings,
    );

    let Some(table) = value.as_table() else {
        return;
    };
    if let Some(v) = table.get("global") {
        unknown_in_table(v, "keys.global.", &["quit", "search", "add"], warnings);
    }
    if let Some(v) = table.get("list") {
        unknown_in_table(
            v,
            "keys.list.",
            &["next", "prev", "page_down", "page_up", "view", "edit", "delete"],
            warnings,
        );
    }
    if let Some(v) = table.get("search_input") {
        unknown_in_table(
            v,
            "keys.search_input.",
            &["cancel", "confirm", "next", "prev"],
            warnings,
        );
    }
    if let Some(v) = table.get("form") {
        unknown_in_table(v, "keys.form.", &["cancel", "submit", "next", "prev"], warnings);
    }
    if let Some(v) = table.get("view") {
        unknown_in_table(v, "keys.view.", &["close"], warnings);
    }
}

fn unknown_in_table(value: &toml::Value, prefix: &str, known: &[&str], warnings: &mut Vec<String>) {
    let Some(table) = value.as_table() else {
        return;
    };
    let known_set: HashSet<&str> = known.iter().copied().collect();
    for key in table.keys() {
        if !known_set.contains(key.as_str()) {
            warnings.push(format!("unknown configuration key `{}{}`", prefix, key));
        }
    }
}

// =============================================================================
// UI file deserialization
// =============================================================================

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct UiFile {
    colors: UiColorsFile,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct UiColorsFile {
    border: RgbColor,
    selection_bg: RgbColor,
    selection_fg: RgbColor,
    separator: RgbColor,
    error: RgbColor,
    status_fg: RgbColor,
    status_bg: RgbColor,
}

impl Default for UiColorsFile {
    fn default() -> Self {
        Self {
            border: RgbColor::new(255, 165, 0),
            selection_bg: RgbColor::new(255, 165, 0),
            selection_fg: RgbColor::new(0, 0, 0),
            separator: RgbColor::new(255, 165, 0),
            error: RgbColor::new(230, 60, 60),
            status_fg: RgbColor::new(255, 165, 0),
            status_bg: RgbColor::new(0, 0, 0),
        }
    }
}

impl From<UiColorsFile> for UiColors {
    fn from(file: UiColorsFile) -> Self {
        Self {
            border: file.border,
            selection_bg: file.selection_bg,
            selection_fg: file.selection_fg,
            separator: file.separator,
            error: file.error,
            status_fg: file.status_fg,
            status_bg: file.status_bg,
        }
    }
}

impl From<UiFile> for UiConfig {
    fn from(file: UiFile) -> Self {
        Self {
            colors: file.colors.into(),
        }
    }
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl<'de> serde::Deserialize<'de> for RgbColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Array([u8; 3]),
            Map { r: u8, g: u8, b: u8 },
        }

        let helper = Helper::deserialize(deserializer)?;
        let (r, g, b) = match helper {
            Helper::Array(values) => (values[0], values[1], values[2]),
            Helper::Map { r, g, b } => (r, g, b),
        };
        Ok(RgbColor { r, g, b })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(raw: &str) -> Result<Config> {
        parse(raw, Path::new("test.toml"))
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = parse_str("").unwrap();
        assert_eq!(config.config_path.as_deref(), Some(Path::new("test.toml")));
        assert!(config.dataset.is_none());
        assert_eq!(config.id_allocation, IdAllocation::Count);
        assert_eq!(config.keys.global.quit, vec!["q".to_string()]);
        assert_eq!(config.keys.form.submit, vec!["Enter".to_string()]);
        assert_eq!(config.ui.colors.selection_fg, RgbColor::new(0, 0, 0));
    }

    #[test]
    fn test_default_bindings_do_not_collide() {
        validate_key_bindings(&Keys::default()).unwrap();
    }

    #[test]
    fn test_single_and_list_bindings() {
        let config = parse_str(
            r#"
            [keys.global]
            quit = "Q"
            add = ["n", "+"]
            "#,
        )
        .unwrap();
        assert_eq!(config.keys.global.quit, vec!["Q".to_string()]);
        assert_eq!(config.keys.global.add, vec!["n".to_string(), "+".to_string()]);
        // untouched entries keep their defaults
        assert_eq!(config.keys.global.search, vec!["/".to_string()]);
    }

    #[test]
    fn test_collision_between_global_and_list_rejected() {
        let err = parse_str(
            r#"
            [keys.list]
            edit = "q"
            "#,
        )
        .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("collision"), "{}", message);
        assert!(message.contains("keys.list"), "{}", message);
    }

    #[test]
    fn test_collision_uses_case_insensitive_key_names() {
        let err = parse_str(
            r#"
            [keys.form]
            submit = "ENTER"
            next = ["enter"]
            "#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("keys.form"));
    }

    #[test]
    fn test_single_character_case_is_significant() {
        // "e" is the default list edit key
        validate_key_bindings(&Keys {
            global: GlobalKeys {
                add: vec!["e".into()],
                ..GlobalKeys::default()
            },
            ..Keys::default()
        })
        .unwrap_err();

        validate_key_bindings(&Keys {
            global: GlobalKeys {
                add: vec!["E".into()],
                ..GlobalKeys::default()
            },
            ..Keys::default()
        })
        .unwrap();
    }

    #[test]
    fn test_id_allocation_setting() {
        let config = parse_str(r#"id_allocation = "monotonic""#).unwrap();
        assert_eq!(config.id_allocation, IdAllocation::Monotonic);

        let err = parse_str(r#"id_allocation = "random""#).unwrap_err();
        assert!(err.to_string().contains("id_allocation"));
    }

    #[test]
    fn test_colors_accept_array_and_map() {
        let config = parse_str(
            r#"
            [ui.colors]
            border = [1, 2, 3]
            error = { r = 9, g = 8, b = 7 }
            "#,
        )
        .unwrap();
        assert_eq!(config.ui.colors.border, RgbColor::new(1, 2, 3));
        assert_eq!(config.ui.colors.error, RgbColor::new(9, 8, 7));
    }

    #[test]
    fn test_dataset_path_kept() {
        let config = parse_str(r#"dataset = "/tmp/people.json""#).unwrap();
        assert_eq!(config.dataset.as_deref(), Some(Path::new("/tmp/people.json")));
    }

    #[test]
    fn test_unknown_keys_are_reported() {
        let value: toml::Value = toml::from_str(
            r#"
            vdir = "/tmp"
            [keys.global]
            help = "?"
            [keys.editor]
            cancel = "Escape"
            [ui.colors]
            accent = [1, 1, 1]
            "#,
        )
        .unwrap();
        let warnings = unknown_key_warnings(&value);
        assert!(warnings.iter().any(|w| w.contains("`vdir`")));
        assert!(warnings.iter().any(|w| w.contains("`keys.global.help`")));
        assert!(warnings.iter().any(|w| w.contains("`keys.editor`")));
        assert!(warnings.iter().any(|w| w.contains("`ui.colors.accent`")));
        assert_eq!(warnings.len(), 4);
    }

    #[test]
    fn test_view_context_only_has_close() {
        let config = parse_str(
            r#"
            [keys.view]
            close = "c"
            "#,
        )
        .unwrap();
        assert_eq!(config.keys.view.close, vec!["c".to_string()]);

        let value: toml::Value = toml::from_str("[keys.view]\nedit = \"e\"\n").unwrap();
        assert_eq!(
            unknown_key_warnings(&value),
            vec!["unknown configuration key `keys.view.edit`".to_string()]
        );
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "id_allocation = \"monotonic\"\n").unwrap();
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.id_allocation, IdAllocation::Monotonic);
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde(Path::new("/data/x.json")), PathBuf::from("/data/x.json"));
    }
}
