//! Educational features: explanations of the DNS queries a command makes.

use colored::Colorize;
use rblcheck_core::{build_query_name, parse_address, ZoneName};

/// Command explanation builder.
pub struct Explain {
    title: String,
    description: String,
    queries: Vec<String>,
    what_happens: Vec<String>,
    learn_more: Option<String>,
}

impl Explain {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            queries: Vec::new(),
            what_happens: Vec::new(),
            learn_more: None,
        }
    }

    fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    fn query(mut self, query: &str) -> Self {
        self.queries.push(query.to_string());
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn reference(mut self, url: &str) -> Self {
        self.learn_more = Some(url.to_string());
        self
    }

    /// Render the explanation as plain text.
    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("=== {} ===", self.title).bold().cyan().to_string(),
            self.description.clone(),
        ];

        if !self.what_happens.is_empty() {
            lines.push(String::new());
            lines.push("How it works:".bold().to_string());
            for (i, step) in self.what_happens.iter().enumerate() {
                lines.push(format!("  {}. {}", i + 1, step));
            }
        }

        if !self.queries.is_empty() {
            lines.push(String::new());
            lines.push("DNS queries:".bold().to_string());
            for query in &self.queries {
                lines.push(format!("  {}", query.dimmed()));
            }
        }

        if let Some(url) = &self.learn_more {
            lines.push(String::new());
            lines.push(format!("{} {}", "Learn more:".bold(), url.cyan().underline()));
        }

        lines.join("\n")
    }

    /// Print the explanation to stderr, keeping stdout for results.
    pub fn print(&self) {
        eprintln!();
        eprintln!("{}", self.render());
        eprintln!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn check(ip: &str, zone: &str) -> Self {
        let mut explanation = Self::new("Blackhole List Check")
            .description(&format!("Asks the {zone} list whether it has {ip}."))
            .step("Reverses the address octets (1.2.3.4 becomes 4.3.2.1)")
            .step("Appends the list's zone to form the query name")
            .step("Any A record means listed; NXDOMAIN means not listed")
            .step("When listed, the TXT record usually says why")
            .reference("https://en.wikipedia.org/wiki/Domain_Name_System_blocklist");

        if let (Ok(addr), Ok(zone)) = (parse_address(ip), ZoneName::new(zone)) {
            if let Ok(name) = build_query_name(addr, &zone) {
                explanation = explanation
                    .query(&format!("A   {name}"))
                    .query(&format!("TXT {name}  (only if listed)"));
            }
        }

        explanation
    }

    pub fn scan(ip: &str, lists: usize) -> Self {
        Self::new("Blackhole List Scan")
            .description(&format!("Checks {ip} against {lists} lists at once."))
            .step("Runs one check per list concurrently")
            .step("A list that times out or fails is reported on its own line")
            .step("Results keep the order of the list catalog")
            .reference("https://en.wikipedia.org/wiki/Domain_Name_System_blocklist")
    }

    pub fn lists() -> Self {
        Self::new("Known Lists")
            .description("Prints the DNSBL zones a scan checks by default.")
            .step("Add your own with `rblcheck config set zones a.example,b.example`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_shows_query_name() {
        colored::control::set_override(false);
        let text = Explain::check("192.0.2.10", "bl.spamcop.net").render();
        assert!(text.contains("A   10.2.0.192.bl.spamcop.net"));
        assert!(text.contains("TXT 10.2.0.192.bl.spamcop.net"));
    }

    #[test]
    fn check_skips_queries_for_bad_input() {
        colored::control::set_override(false);
        let text = Explain::check("nonsense", "bl.spamcop.net").render();
        assert!(!text.contains("DNS queries:"));
        assert!(text.contains("How it works:"));
    }
}
