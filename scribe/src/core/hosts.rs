use serde::{Deserialize, Serialize};

/// Personality used when a host entry carries no description.
pub const DEFAULT_PERSONALITY: &str = "engaging";

/// Dashes that always split a name from its description, highest priority first.
const DASHES: [char; 2] = ['—', '–'];

/// A named speaking role in the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    pub name: String,
    pub personality: String,
}

impl Host {
    fn from_entry(entry: &str) -> Self {
        let split = DASHES
            .iter()
            .find_map(|dash| entry.split_once(*dash))
            .or_else(|| split_at_spaced_hyphen(entry));

        let (name, personality) = match split {
            Some((name, rest)) => (name.trim(), rest.trim()),
            None => (entry.trim(), ""),
        };

        Self {
            name: name.to_string(),
            personality: if personality.is_empty() {
                DEFAULT_PERSONALITY.to_string()
            } else {
                personality.to_string()
            },
        }
    }
}

/// A hyphen only separates when whitespace touches it (`Ann - calm`), so
/// hyphenated names like `Mary-Jane` stay whole.
fn split_at_spaced_hyphen(entry: &str) -> Option<(&str, &str)> {
    entry
        .match_indices('-')
        .map(|(at, _)| at)
        .find(|&at| {
            entry[..at].ends_with(char::is_whitespace) || entry[at + 1..].starts_with(char::is_whitespace)
        })
        .map(|at| (&entry[..at], &entry[at + 1..]))
}

/// Parse `"Name — personality; Name — personality"` into hosts, in input order.
///
/// An em-dash wins over an en-dash, which wins over a hyphen. A hyphen counts
/// as a separator only with whitespace on either side, so `"Mary-Jane"` is a
/// single name with the default personality while `"Ann - calm"` splits.
///
/// Whitespace-only entries (a trailing `;` for instance) are skipped, so an
/// empty string yields no hosts at all.
pub fn parse_hosts(raw: &str) -> Vec<Host> {
    raw.split(';')
        .filter(|entry| !entry.trim().is_empty())
        .map(Host::from_entry)
        .collect()
}

/// The host speaking opposite `hosts[0]`; a solo host plays both parts.
pub fn co_host(hosts: &[Host]) -> Option<&Host> {
    hosts.get(1).or_else(|| hosts.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(name: &str, personality: &str) -> Host {
        Host {
            name: name.to_string(),
            personality: personality.to_string(),
        }
    }

    #[test]
    fn parses_two_hosts_with_em_dash() {
        let hosts = parse_hosts("Alice — funny; Bob — serious");
        assert_eq!(hosts, vec![host("Alice", "funny"), host("Bob", "serious")]);
    }

    #[test]
    fn solo_entry_defaults_personality() {
        assert_eq!(parse_hosts("Solo"), vec![host("Solo", "engaging")]);
    }

    #[test]
    fn accepts_en_dash_and_hyphen() {
        let hosts = parse_hosts("Ann – calm;Ben - loud");
        assert_eq!(hosts, vec![host("Ann", "calm"), host("Ben", "loud")]);
    }

    #[test]
    fn em_dash_wins_over_hyphen_in_name() {
        let hosts = parse_hosts("Mary-Jane — witty and sharp");
        assert_eq!(hosts, vec![host("Mary-Jane", "witty and sharp")]);
    }

    #[test]
    fn hyphenated_name_is_not_split() {
        assert_eq!(parse_hosts("Mary-Jane"), vec![host("Mary-Jane", "engaging")]);
        assert_eq!(
            parse_hosts("Jean-Luc - calm; Ann -bold"),
            vec![host("Jean-Luc", "calm"), host("Ann", "bold")]
        );
        assert_eq!(parse_hosts("Jean-Luc — self-taught"), vec![host("Jean-Luc", "self-taught")]);
    }

    #[test]
    fn empty_description_defaults_personality() {
        assert_eq!(parse_hosts("Kim —   "), vec![host("Kim", "engaging")]);
    }

    #[test]
    fn blank_entries_are_skipped() {
        assert_eq!(parse_hosts("Alice — funny; ").len(), 1);
        assert!(parse_hosts("   ").is_empty());
        assert!(parse_hosts("").is_empty());
    }

    #[test]
    fn nameless_entry_does_not_panic() {
        assert_eq!(parse_hosts("— mysterious"), vec![host("", "mysterious")]);
    }

    #[test]
    fn co_host_falls_back_to_first() {
        let solo = parse_hosts("Solo");
        assert_eq!(co_host(&solo).map(|h| h.name.as_str()), Some("Solo"));

        let duo = parse_hosts("A — x; B — y");
        assert_eq!(co_host(&duo).map(|h| h.name.as_str()), Some("B"));

        assert!(co_host(&[]).is_none());
    }
}
