use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use xshell::Shell;

pub fn read_yaml_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(file_path)?;
    let yaml = serde_yaml::from_str(&content)?;
    Ok(yaml)
}

pub fn read_toml_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(file_path)?;
    let toml = toml::from_str(&content)?;
    Ok(toml)
}

pub fn read_json_file<T>(shell: &Shell, file_path: impl AsRef<Path>) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let content = shell.read_file(file_path)?;
    let json = serde_json::from_str(&content)?;
    Ok(json)
}

pub fn save_yaml_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    content: impl Serialize,
    comment: impl ToString,
) -> anyhow::Result<()> {
    let data = format!(
        "{}{}",
        comment.to_string(),
        serde_yaml::to_string(&content)?
    );
    write_file(shell, file_path, data)
}

pub fn save_toml_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    content: impl Serialize,
    comment: impl ToString,
) -> anyhow::Result<()> {
    let data = format!("{}{}", comment.to_string(), toml::to_string(&content)?);
    write_file(shell, file_path, data)
}

/// Pretty-printed with two-space indentation.
pub fn save_json_file(
    shell: &Shell,
    file_path: impl AsRef<Path>,
    content: impl Serialize,
) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(&content)?;
    write_file(shell, file_path, data)
}

fn write_file(shell: &Shell, file_path: impl AsRef<Path>, data: String) -> anyhow::Result<()> {
    if let Some(parent) = file_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            shell.create_dir(parent)?;
        }
    }
    shell.write_file(file_path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn save_json_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let path = dir.path().join("deployments/nested/localhost.json");

        let mut content = BTreeMap::new();
        content.insert("network", "localhost");
        save_json_file(&shell, &path, &content).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert_eq!(raw, "{\n  \"network\": \"localhost\"\n}");
        let read: BTreeMap<String, String> = read_json_file(&shell, &path).unwrap();
        assert_eq!(read["network"], "localhost");
    }

    #[test]
    fn yaml_comment_is_prepended() {
        let dir = tempfile::tempdir().unwrap();
        let shell = Shell::new().unwrap();
        let path = dir.path().join("wallets.yaml");

        let mut content = BTreeMap::new();
        content.insert("key", 1u32);
        save_yaml_file(&shell, &path, &content, "# keep out of git\n").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("# keep out of git\nkey: 1"));
        let read: BTreeMap<String, u32> = read_yaml_file(&shell, &path).unwrap();
        assert_eq!(read["key"], 1);
    }
}
