use crate::{Error, stores::TransactionStore, transaction::Transaction};

/// A store whose reads and/or writes always fail.
pub(crate) struct FailingTransactionStore {
    pub fail_load: bool,
    pub fail_save: bool,
}

impl Default for FailingTransactionStore {
    fn default() -> Self {
        Self {
            fail_load: true,
            fail_save: true,
        }
    }
}

impl TransactionStore for FailingTransactionStore {
    fn initialize(&self) -> Result<(), Error> {
        Ok(())
    }

    fn load(&self) -> Result<Vec<Transaction>, Error> {
        if self.fail_load {
            Err(Error::StoreReadError("disk on fire".to_owned()))
        } else {
            Ok(Vec::new())
        }
    }

    fn save(&self, _transactions: &[Transaction]) -> Result<(), Error> {
        if self.fail_save {
            Err(Error::StoreWriteError("disk full".to_owned()))
        } else {
            Ok(())
        }
    }
}
