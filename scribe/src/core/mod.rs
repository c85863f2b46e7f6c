pub mod composer;
pub mod config;
pub mod episode;
pub mod export;
pub mod form;
pub mod hosts;
pub mod knowledge;
pub mod render;
pub mod samples;
pub mod segments;
pub mod tables;
pub mod tone;
