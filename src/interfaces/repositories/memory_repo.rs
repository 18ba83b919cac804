use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;

use crate::entities::{
    admin_user::AdminUser, company::Company, faq::Faq, student::Student, update::Update,
};

/// Admin accounts keyed by lowercase email.
#[derive(Clone, Default)]
pub struct MemoryAdminRepo {
    pub admins: Arc<DashMap<String, AdminUser>>,
}

/// Portal content, each collection kept in insertion order.
#[derive(Clone, Default)]
pub struct MemoryCampusRepo {
    pub companies: Arc<RwLock<Vec<Company>>>,
    pub faqs: Arc<RwLock<Vec<Faq>>>,
    pub updates: Arc<RwLock<Vec<Update>>>,
    pub students: Arc<RwLock<Vec<Student>>>,
}

/// Removes the entry with `id`, reporting whether anything was removed.
pub(crate) fn remove_by<T>(items: &RwLock<Vec<T>>, pred: impl Fn(&T) -> bool) -> bool {
    let mut items = items.write();
    let before = items.len();
    items.retain(|item| !pred(item));
    items.len() != before
}
