//! In-memory collaborators for waitlist tests

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::core::db::repositories::{SignupRepositoryError, SignupStore};
use crate::core::db::{NewSignup, Signup};
use crate::core::email::{EmailError, Notifier, OutgoingEmail};

/// Signup store backed by a `Vec`, enforcing email uniqueness like the real table
#[derive(Default)]
pub struct MemorySignupStore {
    rows: Mutex<Vec<Signup>>,
    calls: AtomicUsize,
    fail_inserts: bool,
    fail_counts: bool,
}

impl MemorySignupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `n` unrelated signups
    pub fn with_existing(n: usize) -> Self {
        let store = Self::new();
        {
            let mut rows = store.rows.lock().unwrap();
            for i in 0..n {
                rows.push(
                    NewSignup {
                        name: None,
                        email: format!("seed{}@example.com", i),
                        message: None,
                    }
                    .into_signup(Uuid::new_v4(), Utc::now()),
                );
            }
        }
        store
    }

    pub fn failing_inserts(mut self) -> Self {
        self.fail_inserts = true;
        self
    }

    pub fn failing_counts(mut self) -> Self {
        self.fail_counts = true;
        self
    }

    pub fn rows(&self) -> Vec<Signup> {
        self.rows.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn count_email(&self, email: &str) -> usize {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| row.email == email)
            .count()
    }

    /// Number of insert/count calls received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignupStore for MemorySignupStore {
    async fn insert(&self, signup: &NewSignup) -> Result<Signup, SignupRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_inserts {
            return Err(SignupRepositoryError::DatabaseError(sqlx::Error::Protocol(
                "connection reset".to_string(),
            )));
        }

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.email == signup.email) {
            return Err(SignupRepositoryError::DuplicateEmail);
        }

        let row = signup.clone().into_signup(Uuid::new_v4(), Utc::now());
        rows.push(row.clone());
        Ok(row)
    }

    async fn count(&self) -> Result<u64, SignupRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_counts {
            return Err(SignupRepositoryError::DatabaseError(sqlx::Error::PoolTimedOut));
        }

        Ok(self.rows.lock().unwrap().len() as u64)
    }
}

/// Notifier that forwards every message to a channel
pub struct RecordingNotifier {
    tx: mpsc::UnboundedSender<OutgoingEmail>,
}

impl RecordingNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutgoingEmail>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let _ = self.tx.send(email.clone());
        Ok(())
    }
}

/// Notifier that reports each attempt on a channel and then fails
pub struct FailingNotifier {
    tx: mpsc::UnboundedSender<OutgoingEmail>,
}

impl FailingNotifier {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutgoingEmail>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let _ = self.tx.send(email.clone());
        Err(EmailError::SendError("503: upstream unavailable".to_string()))
    }
}

/// Wait for the next message from a spawned send
pub async fn recv_email(rx: &mut mpsc::UnboundedReceiver<OutgoingEmail>) -> OutgoingEmail {
    tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for email")
        .expect("notifier channel closed")
}

/// Log sink for asserting on emitted events
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    /// Route this thread's events into the buffer until the guard drops
    pub fn capture(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
