use std::borrow::Cow;
use std::env;
use std::ffi::{OsStr, OsString};

/// Read the inherited environment table
///
/// Each variable is joined back into its `KEY=VALUE` form, in the order the
/// host handed them to the process. The returned iterator is lazy and can only
/// be walked once.
pub fn environment_table() -> impl Iterator<Item = OsString> {
    env::vars_os().map(|(key, value)| join_entry(&key, &value))
}

fn join_entry(key: &OsStr, value: &OsStr) -> OsString {
    let mut entry = OsString::with_capacity(key.len() + value.len() + 1);
    entry.push(key);
    entry.push("=");
    entry.push(value);
    entry
}

/// Raw bytes of an entry as they should appear on stdout
#[cfg(unix)]
pub fn entry_bytes(entry: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;

    Cow::Borrowed(entry.as_bytes())
}

/// Raw bytes of an entry as they should appear on stdout
#[cfg(not(unix))]
pub fn entry_bytes(entry: &OsStr) -> Cow<'_, [u8]> {
    match entry.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}
