use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use models::{About, AboutInput, CollectionEntity, Leader, Partner, Resource, Service, Ticket};
use tokio::sync::RwLock;

/// Username/password accepted by `POST /auth/login`.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self { username: "admin".into(), password: "change-me".into() }
    }
}

/// One request as seen by the stub, for asserting on what a client sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestRecord {
    pub method: String,
    pub path: String,
    pub bearer: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredUpload {
    pub category: String,
    pub file_name: String,
    pub size: usize,
}

#[derive(Default)]
pub struct Db {
    next_id: i64,
    pub leaders: BTreeMap<i64, Leader>,
    pub services: BTreeMap<i64, Service>,
    pub resources: BTreeMap<i64, Resource>,
    pub partners: BTreeMap<i64, Partner>,
    pub about: Option<About>,
    pub tickets: BTreeMap<i64, Ticket>,
    pub uploads: Vec<StoredUpload>,
}

impl Db {
    pub fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// A collection the stub can serve generically.
pub trait Table: CollectionEntity {
    fn table(db: &mut Db) -> &mut BTreeMap<i64, Self>;
    fn build(id: i64, input: Self::Input) -> Self;

    /// Server-side constraint checked before insert/replace.
    fn check(_rows: &BTreeMap<i64, Self>, _id: Option<i64>, _input: &Self::Input) -> Result<(), String> {
        Ok(())
    }
}

impl Table for Leader {
    fn table(db: &mut Db) -> &mut BTreeMap<i64, Self> {
        &mut db.leaders
    }

    fn build(id: i64, i: Self::Input) -> Self {
        Leader { id, name: i.name, photo: i.photo, bio: i.bio }
    }
}

impl Table for Service {
    fn table(db: &mut Db) -> &mut BTreeMap<i64, Self> {
        &mut db.services
    }

    fn build(id: i64, i: Self::Input) -> Self {
        Service {
            id,
            name: i.name,
            slug: i.slug,
            description: i.description,
            price: i.price,
            photo: i.photo,
            category: i.category,
        }
    }

    fn check(rows: &BTreeMap<i64, Self>, id: Option<i64>, input: &Self::Input) -> Result<(), String> {
        let clash = rows
            .values()
            .filter(|s| Some(s.id) != id)
            .any(|s| s.slug == input.slug || s.name == input.name);
        if clash {
            return Err("Service name or slug already exists".into());
        }
        Ok(())
    }
}

impl Table for Resource {
    fn table(db: &mut Db) -> &mut BTreeMap<i64, Self> {
        &mut db.resources
    }

    fn build(id: i64, i: Self::Input) -> Self {
        Resource { id, title: i.title, description: i.description, kind: i.kind, url: i.url }
    }
}

impl Table for Partner {
    fn table(db: &mut Db) -> &mut BTreeMap<i64, Self> {
        &mut db.partners
    }

    fn build(id: i64, i: Self::Input) -> Self {
        Partner { id, name: i.name, logo: i.logo, link: i.link }
    }
}

struct Inner {
    db: RwLock<Db>,
    tokens: RwLock<HashSet<String>>,
    credentials: Credentials,
    requests: Mutex<Vec<RequestRecord>>,
    omit_upload_url: AtomicBool,
    blank_login_token: AtomicBool,
    fail_about_reads: AtomicBool,
}

/// Shared state of a running stub; clone freely.
#[derive(Clone)]
pub struct StubState {
    inner: Arc<Inner>,
}

impl Default for StubState {
    fn default() -> Self {
        Self::new(Credentials::default())
    }
}

impl StubState {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            inner: Arc::new(Inner {
                db: RwLock::new(Db::default()),
                tokens: RwLock::new(HashSet::new()),
                credentials,
                requests: Mutex::new(Vec::new()),
                omit_upload_url: AtomicBool::new(false),
                blank_login_token: AtomicBool::new(false),
                fail_about_reads: AtomicBool::new(false),
            }),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    pub(crate) fn db(&self) -> &RwLock<Db> {
        &self.inner.db
    }

    /// Mint a token the stub will accept, as a successful login would.
    pub async fn issue_token(&self) -> String {
        let token = uuid::Uuid::new_v4().to_string();
        self.inner.tokens.write().await.insert(token.clone());
        token
    }

    pub async fn is_valid_token(&self, token: &str) -> bool {
        self.inner.tokens.read().await.contains(token)
    }

    /// Insert a row directly, bypassing auth.
    pub async fn seed<E: Table>(&self, input: E::Input) -> E {
        let mut db = self.inner.db.write().await;
        let id = db.next_id();
        let row = E::build(id, input);
        E::table(&mut db).insert(id, row.clone());
        row
    }

    pub async fn rows<E: Table>(&self) -> Vec<E> {
        let mut db = self.inner.db.write().await;
        E::table(&mut db).values().cloned().collect()
    }

    pub async fn set_about(&self, input: AboutInput) -> About {
        let about = About { id: 1, content: input.content, photo: input.photo };
        self.inner.db.write().await.about = Some(about.clone());
        about
    }

    pub async fn about(&self) -> Option<About> {
        self.inner.db.read().await.about.clone()
    }

    pub async fn tickets(&self) -> Vec<Ticket> {
        self.inner.db.read().await.tickets.values().cloned().collect()
    }

    pub async fn uploads(&self) -> Vec<StoredUpload> {
        self.inner.db.read().await.uploads.clone()
    }

    /// Make upload responses drop their `url` field.
    pub fn omit_upload_url(&self, on: bool) {
        self.inner.omit_upload_url.store(on, Ordering::Release);
    }

    pub(crate) fn upload_url_omitted(&self) -> bool {
        self.inner.omit_upload_url.load(Ordering::Acquire)
    }

    /// Make successful logins answer with an empty token.
    pub fn blank_login_token(&self, on: bool) {
        self.inner.blank_login_token.store(on, Ordering::Release);
    }

    pub(crate) fn login_token_blanked(&self) -> bool {
        self.inner.blank_login_token.load(Ordering::Acquire)
    }

    /// Make `GET /about` answer 500.
    pub fn fail_about_reads(&self, on: bool) {
        self.inner.fail_about_reads.store(on, Ordering::Release);
    }

    pub(crate) fn about_reads_failing(&self) -> bool {
        self.inner.fail_about_reads.load(Ordering::Acquire)
    }

    pub(crate) fn record(&self, r: RequestRecord) {
        self.inner.requests.lock().unwrap_or_else(|p| p.into_inner()).push(r);
    }

    pub fn requests(&self) -> Vec<RequestRecord> {
        self.inner.requests.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RequestRecord> {
        self.requests().into_iter().filter(|r| r.method == method && r.path == path).collect()
    }
}
