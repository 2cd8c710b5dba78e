//! Job board with coaching, and the job possibility view

use crate::domain::job::{mock_jobs, MICRO_JOBS};
use crate::domain::result::{Error, Result};
use crate::domain::{JobBuff, JobCoachingResponse, JobPosting};
use crate::services::generation::{GenerationService, Generated};

#[derive(Debug, Clone)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
    selected: Option<usize>,
    coaching: Option<Generated<JobCoachingResponse>>,
}

impl Default for JobBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl JobBoard {
    pub fn new() -> Self {
        Self::with_postings(mock_jobs())
    }

    pub fn with_postings(postings: Vec<JobPosting>) -> Self {
        Self {
            postings,
            selected: None,
            coaching: None,
        }
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn selected(&self) -> Option<&JobPosting> {
        self.selected.and_then(|i| self.postings.get(i))
    }

    pub fn coaching(&self) -> Option<&Generated<JobCoachingResponse>> {
        self.coaching.as_ref()
    }

    /// Open a posting and ask for coaching based on its successful specs
    pub fn select(
        &mut self,
        id: &str,
        generation: &GenerationService,
    ) -> Result<&Generated<JobCoachingResponse>> {
        let index = self
            .postings
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::not_found(format!("job posting {}", id)))?;

        self.selected = Some(index);
        self.coaching = None;

        let posting = &self.postings[index];
        let coaching = generation.job_coaching(&posting.title, &posting.successful_specs.items);
        Ok(self.coaching.insert(coaching))
    }

    /// Back to the list
    pub fn back(&mut self) {
        self.selected = None;
        self.coaching = None;
    }
}

/// Buffs earned while resting, plus low-pressure side jobs
#[derive(Debug, Clone)]
pub struct JobPossibility {
    pub buffs: Vec<JobBuff>,
    pub micro_jobs: Vec<&'static str>,
}

impl JobPossibility {
    pub fn load(generation: &GenerationService) -> Self {
        Self {
            buffs: generation.job_buffs(),
            micro_jobs: MICRO_JOBS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::offline::OfflineGenerator;

    fn offline() -> GenerationService {
        GenerationService::new(Arc::new(OfflineGenerator::new()))
    }

    #[test]
    fn test_select_and_back() {
        let mut board = JobBoard::new();
        assert_eq!(board.postings().len(), 3);

        let coaching = board.select("j2", &offline()).unwrap();
        assert!(coaching.is_fallback());
        assert_eq!(board.selected().unwrap().id, "j2");

        board.back();
        assert!(board.selected().is_none());
        assert!(board.coaching().is_none());
    }

    #[test]
    fn test_unknown_posting() {
        let mut board = JobBoard::new();
        assert!(matches!(
            board.select("nope", &offline()),
            Err(Error::NotFound(_))
        ));
        assert!(board.selected().is_none());
    }

    #[test]
    fn test_possibility_view() {
        let view = JobPossibility::load(&offline());
        assert_eq!(view.buffs.len(), 3);
        assert_eq!(view.micro_jobs, vec!["데이터 라벨링", "단순 타이핑", "펫 시터", "리뷰 작성"]);
    }
}
