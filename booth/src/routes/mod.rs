pub mod drafts;
pub mod samples;
pub mod scripts;
pub mod tones;
