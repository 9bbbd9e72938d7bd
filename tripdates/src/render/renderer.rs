use super::theme::OneDark;
use std::path::Path;
use termimad::{MadSkin, crossterm::style::Stylize};
use tripdates_core::{
    TripCandidate, TripRequest,
    render::{format_candidates_table, format_summary},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(OneDark::CYAN));
        } else {
            println!("{message}");
        }
    }

    pub fn print_count(&self, count: usize) {
        if self.opts.use_color {
            println!("{}", count.to_string().with(OneDark::YELLOW));
        } else {
            println!("{count}");
        }
    }

    pub fn print_written(&self, path: &Path, count: usize) {
        self.print_info(&format!(
            "Wrote {count} trip possibilities to {}",
            path.display()
        ));
    }

    pub fn print_candidates(&self, request: &TripRequest, candidates: &[TripCandidate]) {
        let summary = format_summary(request, candidates.len(), &self.opts.date_format);
        self.print_md(&summary);
        if candidates.is_empty() {
            self.print_info("No trip fits in this vacation.");
            return;
        }
        let table = format_candidates_table(candidates, &self.opts.date_format);
        self.print_md(&table);
    }
}
