#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use update_glean_tags::{GitHubLabel, LabelSource, Repository, Result, TagGenError};

/// Serves canned pages and records every request it sees.
pub struct FakeLabelSource {
    pages: Vec<Vec<GitHubLabel>>,
    fail_on_page: Option<u32>,
    requests: Mutex<Vec<(u32, u8)>>,
}

impl FakeLabelSource {
    pub fn new(pages: Vec<Vec<GitHubLabel>>) -> Self {
        Self {
            pages,
            fail_on_page: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, page: u32) -> Self {
        self.fail_on_page = Some(page);
        self
    }

    pub fn requests(&self) -> Vec<(u32, u8)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LabelSource for FakeLabelSource {
    async fn fetch_label_page(
        &self,
        _repo: &Repository,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<GitHubLabel>> {
        self.requests.lock().unwrap().push((page, per_page));

        if self.fail_on_page == Some(page) {
            return Err(TagGenError::ApiError(format!("page {} unavailable", page)));
        }

        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }
}

/// `count` distinct labels, every third one feature-prefixed.
pub fn full_page(page: usize, count: usize) -> Vec<GitHubLabel> {
    (0..count)
        .map(|i| {
            let n = page * count + i;
            if n % 3 == 0 {
                GitHubLabel::new(format!("Feature:Area{}", n), format!("Area {}", n))
            } else {
                GitHubLabel::new(format!("Label{}", n), "")
            }
        })
        .collect()
}

pub fn fenix() -> Repository {
    Repository::new("mozilla-mobile", "fenix")
}
