use super::ledger::CollectionLedger;
use crate::core::constants::{LEDGER_FILE_NAME, LEDGER_VERSION_MAGIC};
use crate::utils::persistence::{data_dir, write_atomic};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Saves and loads the collection ledger in a checksummed binary format
pub struct LedgerSaveManager {
    save_path: PathBuf,
}

impl LedgerSaveManager {
    /// Ledger file in the platform data directory
    pub fn new() -> io::Result<Self> {
        Ok(Self::with_path(data_dir()?.join(LEDGER_FILE_NAME)))
    }

    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Saves the ledger with checksum verification
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized ledger (variable length)
    /// - SHA256 checksum (32 bytes)
    pub fn save(&self, ledger: &CollectionLedger) -> io::Result<()> {
        let data =
            bincode::serialize(ledger).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let data_len = u32::try_from(data.len())
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "ledger too large"))?;

        let mut bytes = Vec::with_capacity(8 + 4 + data.len() + 32);
        bytes.extend_from_slice(&LEDGER_VERSION_MAGIC.to_le_bytes());
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.extend_from_slice(&data);
        let checksum = Sha256::digest(&bytes);
        bytes.extend_from_slice(&checksum);

        write_atomic(&self.save_path, &bytes)
    }

    /// Loads the ledger with checksum verification
    ///
    /// Returns an error if:
    /// - The file doesn't exist
    /// - The version magic is incorrect
    /// - The length header disagrees with the file size
    /// - The checksum verification fails
    /// - The data cannot be deserialized
    pub fn load(&self) -> io::Result<CollectionLedger> {
        let mut file = fs::File::open(&self.save_path)?;

        let mut version_bytes = [0u8; 8];
        file.read_exact(&mut version_bytes)?;
        let version = u64::from_le_bytes(version_bytes);

        if version != LEDGER_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid ledger version: expected 0x{:016X}, got 0x{:016X}",
                    LEDGER_VERSION_MAGIC, version
                ),
            ));
        }

        let mut length_bytes = [0u8; 4];
        file.read_exact(&mut length_bytes)?;
        let data_len = u32::from_le_bytes(length_bytes);

        // Header, payload and checksum must account for the whole file
        let expected_len = 8 + 4 + u64::from(data_len) + 32;
        let file_len = file.metadata()?.len();
        if expected_len != file_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Ledger length {} does not match file size {}",
                    data_len, file_len
                ),
            ));
        }

        let mut data = vec![0u8; data_len as usize];
        file.read_exact(&mut data)?;

        let mut stored_checksum = [0u8; 32];
        file.read_exact(&mut stored_checksum)?;

        let mut hasher = Sha256::new();
        hasher.update(version_bytes);
        hasher.update(length_bytes);
        hasher.update(&data);
        let computed_checksum = hasher.finalize();

        if stored_checksum != computed_checksum.as_slice() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Checksum verification failed",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Loads the ledger, starting an empty one if the file is missing or bad
    pub fn load_or_default(&self) -> CollectionLedger {
        match self.load() {
            Ok(ledger) => ledger,
            Err(e) if e.kind() == io::ErrorKind::NotFound => CollectionLedger::new(),
            Err(e) => {
                log::warn!(
                    "could not read {}, starting an empty journal: {}",
                    self.save_path.display(),
                    e
                );
                CollectionLedger::new()
            }
        }
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::types::RarityTier;

    fn scratch_manager() -> (PathBuf, LedgerSaveManager) {
        let dir = std::env::temp_dir().join(format!("lakeside-ledger-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).expect("create scratch dir");
        let manager = LedgerSaveManager::with_path(dir.join(LEDGER_FILE_NAME));
        (dir, manager)
    }

    #[test]
    fn test_save_and_load() {
        let (dir, manager) = scratch_manager();

        let mut ledger = CollectionLedger::new();
        ledger.record("Mossfin", RarityTier::Common);
        ledger.record("Eternal Chest", RarityTier::Legendary);

        manager.save(&ledger).expect("Failed to save ledger");
        assert!(manager.save_exists());

        let loaded = manager.load().expect("Failed to load ledger");
        assert_eq!(loaded, ledger);

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_load_nonexistent() {
        let (dir, manager) = scratch_manager();

        let result = manager.load();
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
        assert!(manager.load_or_default().is_empty());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_tampered_file_fails_checksum() {
        let (dir, manager) = scratch_manager();

        let mut ledger = CollectionLedger::new();
        ledger.record("Glowfin", RarityTier::Rare);
        manager.save(&ledger).unwrap();

        let mut bytes = fs::read(manager.path()).unwrap();
        let last_data_byte = bytes.len() - 33;
        bytes[last_data_byte] ^= 0xff;
        fs::write(manager.path(), bytes).unwrap();

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(manager.load_or_default().is_empty());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_wrong_magic_rejected() {
        let (dir, manager) = scratch_manager();
        fs::write(manager.path(), [0u8; 64]).unwrap();

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("Invalid ledger version"));

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_oversized_length_header_rejected() {
        let (dir, manager) = scratch_manager();

        let mut bytes = LEDGER_VERSION_MAGIC.to_le_bytes().to_vec();
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 16]);
        fs::write(manager.path(), bytes).unwrap();

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("does not match file size"));
        assert!(manager.load_or_default().is_empty());

        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_truncated_file_rejected() {
        let (dir, manager) = scratch_manager();

        let mut ledger = CollectionLedger::new();
        ledger.record("Mossfin", RarityTier::Common);
        manager.save(&ledger).unwrap();

        let mut bytes = fs::read(manager.path()).unwrap();
        bytes.truncate(bytes.len() - 10);
        fs::write(manager.path(), bytes).unwrap();

        let err = manager.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);

        fs::remove_dir_all(dir).ok();
    }
}
