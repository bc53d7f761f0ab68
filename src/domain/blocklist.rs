//! Static suppression list.
//!
//! Social networks, big-tech platforms, commerce giants and reserved sample
//! domains are never stored, whatever form they were submitted in.
//!
//! A domain is blocked when it equals an entry or is a proper dot-subdomain of
//! one: `mail.facebook.com` is blocked, `evil-facebook.com` is not. Lookup
//! walks the dot positions of the candidate and probes a hash set, so the cost
//! grows with label count rather than list size.

use std::collections::HashSet;
use std::sync::LazyLock;

const BLOCKED_DOMAINS: &[&str] = &[
    // Meta
    "facebook.com",
    "fb.com",
    "fbcdn.net",
    "facebook.net",
    "fbsbx.com",
    "messenger.com",
    "instagram.com",
    "whatsapp.com",
    "whatsapp.net",
    "meta.com",
    "oculus.com",
    "workplace.com",
    "threads.net",
    // Twitter / X
    "twitter.com",
    "x.com",
    "t.co",
    "twimg.com",
    "tweetdeck.com",
    // LinkedIn
    "linkedin.com",
    "licdn.com",
    "lnkd.in",
    // Microsoft
    "microsoft.com",
    "msn.com",
    "live.com",
    "outlook.com",
    "office.com",
    "office365.com",
    "azure.com",
    "bing.com",
    "windowsupdate.com",
    "microsoftonline.com",
    "sharepoint.com",
    "onedrive.com",
    "xbox.com",
    "skype.com",
    "hotmail.com",
    "visualstudio.com",
    "github.com",
    "githubusercontent.com",
    "githubassets.com",
    "npmjs.com",
    // Amazon
    "amazon.com",
    "amazon.com.br",
    "amazon.co.uk",
    "amazon.de",
    "amazon.fr",
    "amazon.es",
    "amazon.it",
    "amazon.ca",
    "amazon.co.jp",
    "amazon.in",
    "amazonaws.com",
    "awsstatic.com",
    "aws.amazon.com",
    "cloudfront.net",
    "amzn.to",
    "a2z.com",
    "twitch.tv",
    "imdb.com",
    // Other social
    "tiktok.com",
    "snapchat.com",
    "pinterest.com",
    "reddit.com",
    "discord.com",
    "discord.gg",
    "telegram.org",
    "t.me",
    // Shopify
    "shopify.com",
    "myshopify.com",
    "shopifycdn.com",
    "shopifysvc.com",
    // Reserved / sample
    "example.org",
    "example.com",
    "example.net",
    "test.com",
    "test.org",
];

static DEFAULT_BLOCKLIST: LazyLock<Blocklist> =
    LazyLock::new(|| Blocklist::new(BLOCKED_DOMAINS.iter().copied()));

/// Immutable set of blocked domains.
#[derive(Debug, Clone)]
pub struct Blocklist {
    entries: HashSet<String>,
}

impl Blocklist {
    /// Builds a blocklist from arbitrary entries (lowercased on insert).
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|e| e.as_ref().trim().to_ascii_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }

    /// The built-in list, constructed once per process.
    pub fn builtin() -> &'static Blocklist {
        &DEFAULT_BLOCKLIST
    }

    /// Returns true if `domain` equals an entry or is a dot-subdomain of one.
    ///
    /// Expects a canonical (lowercase) domain.
    pub fn is_blocked(&self, domain: &str) -> bool {
        if self.entries.contains(domain) {
            return true;
        }

        domain
            .match_indices('.')
            .any(|(dot, _)| self.entries.contains(&domain[dot + 1..]))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_is_blocked() {
        let list = Blocklist::builtin();
        assert!(list.is_blocked("facebook.com"));
        assert!(list.is_blocked("t.co"));
        assert!(list.is_blocked("example.com"));
    }

    #[test]
    fn test_subdomain_is_blocked() {
        let list = Blocklist::builtin();
        assert!(list.is_blocked("sub.facebook.com"));
        assert!(list.is_blocked("a.b.c.amazonaws.com"));
        assert!(list.is_blocked("shop.myshopify.com"));
    }

    #[test]
    fn test_suffix_without_dot_boundary_is_not_blocked() {
        let list = Blocklist::builtin();
        assert!(!list.is_blocked("evil-facebook.com"));
        assert!(!list.is_blocked("notx.com"));
        assert!(!list.is_blocked("mytest.com"));
    }

    #[test]
    fn test_parent_of_entry_is_not_blocked() {
        let list = Blocklist::new(["deep.example-site.org"]);
        assert!(list.is_blocked("deep.example-site.org"));
        assert!(list.is_blocked("x.deep.example-site.org"));
        assert!(!list.is_blocked("example-site.org"));
    }

    #[test]
    fn test_unrelated_domain_is_not_blocked() {
        let list = Blocklist::builtin();
        assert!(!list.is_blocked("example-site.com"));
        assert!(!list.is_blocked("rust-lang.org"));
    }

    #[test]
    fn test_custom_entries_are_normalized() {
        let list = Blocklist::new(["  Tracker.IO ", ""]);
        assert_eq!(list.len(), 1);
        assert!(list.is_blocked("tracker.io"));
        assert!(list.is_blocked("cdn.tracker.io"));
    }

    #[test]
    fn test_builtin_is_not_empty() {
        assert!(!Blocklist::builtin().is_empty());
        assert!(Blocklist::default().is_blocked("reddit.com"));
    }
}
