use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use indexmap::IndexMap;
use tracing::{instrument, Level};

use crate::{
    store::{MemoryStore, Store},
    Account, Error,
};

/// A [`Store`] backed by a YAML file on disk
///
/// The whole file is rewritten on every [`put`](Store::put). The new contents
/// go to a sibling temporary file which is then renamed over the original, so
/// a crash mid-write leaves the previous state intact.
#[derive(Debug)]
pub struct YamlStore {
    path: PathBuf,
    cache: MemoryStore,
}

impl YamlStore {
    /// Open the store at `path`. A missing file is treated as an empty store.
    ///
    /// # Errors
    ///
    /// Fails if the file exists but cannot be read or parsed.
    #[instrument]
    pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();

        let accounts: IndexMap<String, Account> = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => IndexMap::default(),
            Ok(raw) => serde_yaml::from_str::<Option<_>>(&raw)?.unwrap_or_default(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => IndexMap::default(),
            Err(e) => return Err(e.into()),
        };

        tracing::event!(Level::DEBUG, accounts = accounts.len(), "loaded accounts");

        Ok(Self {
            path,
            cache: MemoryStore::from_accounts(accounts),
        })
    }

    /// The location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, accounts: &IndexMap<String, Account>) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("yaml.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_yaml::to_writer(&mut writer, accounts)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;

        Ok(())
    }
}

impl Store for YamlStore {
    fn get(&self, account_no: &str) -> Option<&Account> {
        self.cache.get(account_no)
    }

    #[instrument(skip(self, account), fields(account_no = account.account_no()))]
    fn put(&mut self, account: Account) -> Result<(), Error> {
        let mut next = self.cache.as_map().clone();
        next.insert(account.account_no().to_string(), account.clone());

        self.flush(&next)?;
        self.cache.insert(account);

        tracing::event!(Level::DEBUG, path = %self.path.display(), "persisted account");

        Ok(())
    }

    fn accounts(&self) -> Box<dyn Iterator<Item = &Account> + '_> {
        self.cache.accounts()
    }
}
