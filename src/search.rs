use crate::contact::Contact;

/// Lowercase form used for name matching.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}

/// Whether `contact` is visible for `query`: the name contains the query in
/// any case, or the mobile contains it verbatim.
pub fn matches(contact: &Contact, query: &str) -> bool {
    normalize(&contact.name).contains(&normalize(query)) || contact.mobile.contains(query)
}

/// Contacts visible for `query`, in list order. An empty query keeps all.
pub fn filter<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.is_empty() {
        return contacts.iter().collect();
    }
    contacts.iter().filter(|c| matches(c, query)).collect()
}
