//! Explicit unit of work
//!
//! A `UnitOfWork` owns one pooled connection inside an open transaction. Every
//! repository is constructed over `uow.conn()`, so the atomic scope is visible at each
//! call site. Dropping a unit of work without `commit` rolls it back and returns the
//! connection to the pool.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use super::DbError;

pub struct UnitOfWork {
    tx: Transaction<'static, Postgres>,
}

impl UnitOfWork {
    /// Acquire a connection and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Connection for repositories taking part in this unit of work.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await?;
        Ok(())
    }
}
