//! Session activity log, events as data.
//!
//! Pipe-delimited lines the presentation layer can replay or dump for
//! debugging. The engine never writes to stdout or a log file itself.

#[derive(Clone, Debug, Default)]
pub struct SessionLogger {
    log: Vec<String>,
}

impl SessionLogger {
    pub fn new() -> Self {
        SessionLogger::default()
    }

    pub fn log_catalog_loaded(&mut self, count: usize) {
        self.log.push(format!("|catalog|{count}"));
    }

    pub fn log_filter(&mut self, view: &str) {
        self.log.push(format!("|filter|{view}"));
    }

    pub fn log_page(&mut self, page: usize, total_pages: usize) {
        self.log.push(format!("|page|{page}/{total_pages}"));
    }

    pub fn log_search(&mut self, term: &str, hits: usize) {
        self.log.push(format!("|search|{term}|{hits}"));
    }

    pub fn log_search_cleared(&mut self) {
        self.log.push("|search|cleared".to_string());
    }

    pub fn log_favorite(&mut self, id: &str, favorite: bool) {
        let state = if favorite { "on" } else { "off" };
        self.log.push(format!("|favorite|{id}|{state}"));
    }

    pub fn log_compare_pick(&mut self, id: &str) {
        self.log.push(format!("|compare|pick|{id}"));
    }

    pub fn log_compare_full(&mut self) {
        self.log.push("|compare|full".to_string());
    }

    pub fn log_compare_cleared(&mut self) {
        self.log.push("|compare|cleared".to_string());
    }

    pub fn log_entry_created(&mut self, id: &str) {
        self.log.push(format!("|create|{id}"));
    }

    pub fn log_entry_updated(&mut self, id: &str) {
        self.log.push(format!("|update|{id}"));
    }

    pub fn log_entry_deleted(&mut self, id: &str) {
        self.log.push(format!("|delete|{id}"));
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_use_the_pipe_format() {
        let mut logger = SessionLogger::new();
        logger.log_catalog_loaded(151);
        logger.log_filter("ByType(Fire)");
        logger.log_page(2, 8);
        logger.log_favorite("25", true);
        assert_eq!(
            logger.log_lines(),
            [
                "|catalog|151",
                "|filter|ByType(Fire)",
                "|page|2/8",
                "|favorite|25|on",
            ]
        );
    }
}
