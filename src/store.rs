//! Flat-file CSV persistence for the recipe collection.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, AppResult};
use crate::models::Recipe;

/// Whole-file load and replace; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> AppResult<Vec<Recipe>> {
        let raw = fs::read(&self.path)
            .await
            .map_err(|source| AppError::StorageRead {
                path: self.path.clone(),
                source,
            })?;

        let mut reader = csv::Reader::from_reader(raw.as_slice());
        let mut recipes = Vec::new();
        for record in reader.deserialize() {
            recipes.push(record?);
        }
        Ok(recipes)
    }

    pub async fn write(&self, recipes: &[Recipe]) -> AppResult<()> {
        let mut payload = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut payload);
            for recipe in recipes {
                writer.serialize(recipe)?;
            }
            writer.flush().map_err(|source| AppError::StorageWrite {
                path: self.path.clone(),
                source,
            })?;
        }

        self.replace_file(&payload)
            .await
            .map_err(|source| AppError::StorageWrite {
                path: self.path.clone(),
                source,
            })
    }

    // Synced temp file in the destination directory, then renamed over it,
    // so readers never observe a torn file.
    async fn replace_file(&self, payload: &[u8]) -> std::io::Result<()> {
        let tmp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(payload).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp_path, &self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            recipe_cuisine: "british".to_string(),
            ..Recipe::default()
        }
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let store = RecipeStore::new(dir.path().join("absent.csv"));

        let err = store.read().await.unwrap_err();
        assert!(matches!(err, AppError::StorageRead { .. }));
    }

    #[tokio::test]
    async fn short_row_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.csv");
        tokio::fs::write(&path, "id,created_at,updated_at\n1,now\n")
            .await
            .unwrap();

        let err = RecipeStore::new(&path).read().await.unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[tokio::test]
    async fn write_replaces_the_file_and_leaves_no_temp_behind() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.csv");
        let store = RecipeStore::new(&path);

        store
            .write(&[recipe("1", "Pork Chilli"), recipe("2", "Umbrian Wild Boar")])
            .await
            .unwrap();

        let loaded = store.read().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "1");
        assert_eq!(loaded[1].title, "Umbrian Wild Boar");

        let mut entries = tokio::fs::read_dir(dir.path()).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name());
        }
        assert_eq!(names, vec![std::ffi::OsString::from("recipes.csv")]);
    }

    #[tokio::test]
    async fn header_row_matches_the_fixed_column_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.csv");
        RecipeStore::new(&path)
            .write(&[recipe("1", "Pork Chilli")])
            .await
            .unwrap();

        let raw = tokio::fs::read_to_string(&path).await.unwrap();
        let header = raw.lines().next().unwrap();
        assert_eq!(header, Recipe::FIELDS.join(","));
    }

    #[tokio::test]
    async fn delimiters_and_line_breaks_survive_a_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = RecipeStore::new(dir.path().join("recipes.csv"));

        let mut awkward = recipe("1", "Pork, Chilli & \"Friends\"");
        awkward.marketing_description = "line one\nline two".to_string();
        store.write(std::slice::from_ref(&awkward)).await.unwrap();

        let loaded = store.read().await.unwrap();
        assert_eq!(loaded, vec![awkward]);
    }
}
