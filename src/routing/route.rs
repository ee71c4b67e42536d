use crate::http::method::{allow_header, Method};

use super::PatternSpec;

/// One entry of the ordered route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route<H> {
    pub pattern: PatternSpec,
    pub methods: Vec<Method>,
    pub handler: H,
}

impl<H> Route<H> {
    pub fn new(pattern: PatternSpec, methods: impl IntoIterator<Item = Method>, handler: H) -> Self {
        Route {
            pattern,
            methods: methods.into_iter().collect(),
            handler,
        }
    }

    /// Retrieval route, answers GET and HEAD
    pub fn get(pattern: PatternSpec, handler: H) -> Self {
        Self::new(pattern, [Method::Get, Method::Head], handler)
    }

    pub fn post(pattern: PatternSpec, handler: H) -> Self {
        Self::new(pattern, [Method::Post], handler)
    }

    pub fn allows(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    pub fn allowed_methods(&self) -> &[Method] {
        &self.methods
    }

    /// Value for an `Allow` response header
    pub fn allow_header(&self) -> String {
        allow_header(&self.methods)
    }

    pub(crate) fn dedup_methods(&mut self) {
        let mut seen = Vec::with_capacity(self.methods.len());
        self.methods.retain(|method| {
            if seen.contains(method) {
                false
            } else {
                seen.push(method.clone());
                true
            }
        });
    }
}
