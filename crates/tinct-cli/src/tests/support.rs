//! Shared fixtures for CLI tests.

use std::ffi::OsString;
use std::fs;
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use rstest::fixture;
use tempfile::TempDir;

/// A one-object Scala document.
pub(super) const HELLO_SCALA: &str = "object Hello {\n  val greeting = \"hi\"\n}\n";

/// Serialised syntax tree of [`HELLO_SCALA`].
pub(super) const HELLO_TREE: &str = r#"{"type": "Source", "pos": {"start": 0, "end": 39}, "stats": [
  {"type": "Defn.Object", "pos": {"start": 0, "end": 38},
   "name": {"pos": {"start": 7, "end": 12}, "value": "Hello"},
   "template": {"pos": {"start": 13, "end": 38}, "stats": [
     {"type": "Defn.Val", "pos": {"start": 17, "end": 36},
      "pats": [{"type": "Pat.Var", "pos": {"start": 21, "end": 29},
                "name": {"pos": {"start": 21, "end": 29}, "value": "greeting"}}],
      "rhs": {"type": "Lit.String", "pos": {"start": 32, "end": 36}, "value": "hi"}}
   ]}}
]}"#;

/// Temporary directory holding input files for one test.
pub(super) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(super) fn root(&self) -> &Utf8Path {
        Utf8Path::from_path(self.dir.path()).expect("temp dir is UTF-8")
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root().join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }
}

/// Workspace with `hello.scala` and `hello.json` written out.
#[fixture]
pub(super) fn hello() -> Workspace {
    let workspace = Workspace {
        dir: TempDir::new().expect("create temp dir"),
    };
    workspace.write("hello.scala", HELLO_SCALA);
    workspace.write("hello.json", HELLO_TREE);
    workspace
}

/// Outcome of an in-process CLI run.
pub(super) struct Outcome {
    pub(super) exit: ExitCode,
    pub(super) stdout: String,
    pub(super) stderr: String,
}

pub(super) fn run_cli<I, S>(args: I) -> Outcome
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let argv = std::iter::once(OsString::from("tinct")).chain(args.into_iter().map(Into::into));
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = crate::run(argv, &mut stdout, &mut stderr);
    Outcome {
        exit,
        stdout: String::from_utf8(stdout).expect("stdout utf8"),
        stderr: String::from_utf8(stderr).expect("stderr utf8"),
    }
}
