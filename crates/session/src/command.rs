// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Turning a command description into `execve` arguments.
//!
//! Everything the child needs is allocated here, before forking, so the child
//! only has to call `execve`.

use std::ffi::{CString, OsStr, OsString};
use std::os::unix::ffi::OsStringExt;
use std::path::{Path, PathBuf};

use crate::SessionError;

/// Command to run inside the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    pub program: String,
    pub args: Vec<String>,
    /// Variables set on top of the caller's environment.
    pub env: Vec<(String, String)>,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Default::default()
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// `execve` arguments prepared ahead of the fork.
#[derive(Debug)]
pub(crate) struct Exec {
    pub path: CString,
    pub argv: Vec<CString>,
    pub envp: Vec<CString>,
    /// Written to the pty by the child when `execve` fails.
    pub failure_message: Vec<u8>,
}

impl Exec {
    pub fn prepare(command: &Command) -> Result<Self, SessionError> {
        if command.program.is_empty() {
            return Err(SessionError::InvalidCommand("empty program name".into()));
        }

        let env = merge_env(std::env::vars_os(), &command.env);
        let search_path = env
            .iter()
            .find(|(k, _)| k.as_os_str() == "PATH")
            .map(|(_, v)| v.as_os_str());
        let path = resolve_program(&command.program, search_path);

        let argv = std::iter::once(command.program.as_str())
            .chain(command.args.iter().map(String::as_str))
            .map(|a| to_cstring(a.as_bytes().to_vec()))
            .collect::<Result<Vec<_>, _>>()?;

        let envp = env
            .into_iter()
            .map(|(k, v)| {
                let mut entry = k.into_vec();
                entry.push(b'=');
                entry.extend(v.into_vec());
                to_cstring(entry)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path: to_cstring(path.into_os_string().into_vec())?,
            argv,
            envp,
            failure_message: format!("{}: command not found\n", command.program).into_bytes(),
        })
    }
}

fn to_cstring(bytes: Vec<u8>) -> Result<CString, SessionError> {
    CString::new(bytes).map_err(|e| {
        SessionError::InvalidCommand(format!(
            "argument contains a NUL byte: {}",
            String::from_utf8_lossy(&e.into_vec())
        ))
    })
}

/// Lay `overlay` over `base`. Keys already in `base` keep their position.
pub(crate) fn merge_env<I>(base: I, overlay: &[(String, String)]) -> Vec<(OsString, OsString)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut env: Vec<(OsString, OsString)> = base.into_iter().collect();
    for (key, value) in overlay {
        match env.iter_mut().find(|(k, _)| k.as_os_str() == OsStr::new(key)) {
            Some(entry) => entry.1 = OsString::from(value),
            None => env.push((OsString::from(key), OsString::from(value))),
        }
    }
    env
}

/// Find `program` on `search_path` the way `execvp` would.
///
/// Names containing a slash are used as given. Unresolved names are returned
/// unchanged so `execve` fails with `ENOENT` in the child.
pub(crate) fn resolve_program(program: &str, search_path: Option<&OsStr>) -> PathBuf {
    if program.contains('/') {
        return PathBuf::from(program);
    }
    search_path
        .into_iter()
        .flat_map(|paths| std::env::split_paths(paths))
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
        .unwrap_or_else(|| PathBuf::from(program))
}

fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
