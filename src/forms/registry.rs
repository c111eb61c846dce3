use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;
use uuid::Uuid;

use super::{FormController, Submission};
use crate::errors::{EduConnectError, Result};
use crate::models::forms::responses::FormView;

/// 打开中的表单
///
/// 控制台唯一的可变状态。不会在后端调用期间持有任何表单的锁。
pub struct FormRegistry {
    forms: DashMap<Uuid, FormController>,
    // 已占用的名额，先占位再插入，保证并发打开也不超过上限
    open: AtomicUsize,
    max_open: usize,
}

impl FormRegistry {
    pub fn new(max_open: usize) -> Self {
        Self {
            forms: DashMap::new(),
            open: AtomicUsize::new(0),
            max_open,
        }
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.forms.contains_key(&id)
    }

    fn not_found(id: Uuid) -> EduConnectError {
        EduConnectError::form_not_found(format!("Form {id} is not open"))
    }

    /// 登记新表单，返回表单视图
    pub fn insert(&self, form: FormController) -> Result<FormView> {
        let reserved = self
            .open
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |open| {
                (open < self.max_open).then_some(open + 1)
            });
        if reserved.is_err() {
            return Err(EduConnectError::form_limit(format!(
                "Too many open forms (max {})",
                self.max_open
            )));
        }
        let view = form.view();
        debug!("Opened {} form {}", form.resource(), form.id());
        self.forms.insert(form.id(), form);
        Ok(view)
    }

    pub fn view(&self, id: Uuid) -> Result<FormView> {
        self.forms
            .get(&id)
            .map(|form| form.view())
            .ok_or_else(|| Self::not_found(id))
    }

    /// 在表单上执行修改
    pub fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut FormController) -> Result<R>,
    ) -> Result<R> {
        let mut form = self.forms.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        f(&mut form)
    }

    /// 校验并取出提交内容，表单保持打开
    pub fn submission(&self, id: Uuid) -> Result<Submission> {
        self.forms
            .get(&id)
            .ok_or_else(|| Self::not_found(id))?
            .submission()
    }

    pub fn remove(&self, id: Uuid) -> Result<FormController> {
        self.forms
            .remove(&id)
            .map(|(_, form)| {
                self.open.fetch_sub(1, Ordering::SeqCst);
                form
            })
            .ok_or_else(|| Self::not_found(id))
    }
}
