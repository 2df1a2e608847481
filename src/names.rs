use crate::finals::RatioTable;

pub const API_BASE: &str = "/api";
pub const MCQS_URL: &str = "/mcqs";
pub const RANDOM_MCQS_URL: &str = "/mcqs/random";
pub const FINALS_URL: &str = "/mcqs/finals";
pub const LESSONS_URL: &str = "/lessons";
pub const HEALTH_URL: &str = "/health";

// Paging and sampling defaults
pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_LESSONS_PAGE_SIZE: usize = 1000;
pub const DEFAULT_RANDOM_COUNT: usize = 10;
pub const DEFAULT_FINALS_COUNT: usize = 50;

// Subjects
pub const PHARMACOLOGY: &str = "pharmacology";
pub const PATHOLOGY: &str = "pathology";
pub const BOTH_SUBJECTS: &str = "both";

pub const FINALS_RATIO: RatioTable = RatioTable(&[(PHARMACOLOGY, 0.5), (PATHOLOGY, 0.5)]);
