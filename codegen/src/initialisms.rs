//! Go initialism normalization (`UserId` -> `UserID`)

/// Initialisms from the Go lint list, in title case as `heck` produces them
const INITIALISMS: &[(&str, &str)] = &[
    ("Acl", "ACL"),
    ("Api", "API"),
    ("Ascii", "ASCII"),
    ("Cpu", "CPU"),
    ("Css", "CSS"),
    ("Dns", "DNS"),
    ("Eof", "EOF"),
    ("Guid", "GUID"),
    ("Html", "HTML"),
    ("Http", "HTTP"),
    ("Https", "HTTPS"),
    ("Id", "ID"),
    ("Ip", "IP"),
    ("Json", "JSON"),
    ("Lhs", "LHS"),
    ("Qps", "QPS"),
    ("Ram", "RAM"),
    ("Rhs", "RHS"),
    ("Rpc", "RPC"),
    ("Sla", "SLA"),
    ("Smtp", "SMTP"),
    ("Sql", "SQL"),
    ("Ssh", "SSH"),
    ("Tcp", "TCP"),
    ("Tls", "TLS"),
    ("Ttl", "TTL"),
    ("Udp", "UDP"),
    ("Ui", "UI"),
    ("Uid", "UID"),
    ("Uri", "URI"),
    ("Url", "URL"),
    ("Uuid", "UUID"),
    ("Vm", "VM"),
    ("Xml", "XML"),
    ("Xmpp", "XMPP"),
    ("Xsrf", "XSRF"),
    ("Xss", "XSS"),
];

/// Look up a single title-case word
pub fn initialism(word: &str) -> Option<&'static str> {
    INITIALISMS
        .iter()
        .find(|(title, _)| *title == word)
        .map(|(_, upper)| *upper)
}

/// Rewrite every maximal `[A-Z][a-z]+` run that spells an initialism.
///
/// Runs are maximal, so `Identity` and `Idle` are left alone while `UserId`,
/// `IdCard` and `Id2` become `UserID`, `IDCard` and `ID2`.
pub fn normalize_initialisms(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        if !ch.is_ascii_uppercase() {
            out.push(ch);
            continue;
        }

        let mut end = start + ch.len_utf8();
        while let Some(&(idx, next)) = chars.peek() {
            if !next.is_ascii_lowercase() {
                break;
            }
            end = idx + next.len_utf8();
            chars.next();
        }

        let run = &text[start..end];
        out.push_str(initialism(run).unwrap_or(run));
    }

    out
}
