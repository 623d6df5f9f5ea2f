//! Reading key input and writing key output.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::crypto::{Curve, Zeroizing};

/// Reads the whole of `path`, or stdin when no path is given.
///
/// The buffer is wiped on drop since it usually holds a private key.
pub fn read_input(path: Option<&Path>) -> io::Result<Zeroizing<Vec<u8>>> {
    match path {
        Some(path) => fs::read(path).map(Zeroizing::new),
        None => {
            let mut buf = Zeroizing::new(Vec::new());
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Writes a private key, readable by the owner only on Unix.
pub fn write_private_key(path: &Path, pem: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    // The creation mode is ignored when the file already exists.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(pem.as_bytes())?;
    tracing::debug!(path = %path.display(), "wrote private key");
    Ok(())
}

/// Writes each key to `<dir>/<curve>-<n>.pem`, creating `dir` if needed.
pub fn write_private_keys<S: AsRef<str>>(
    dir: &Path,
    curve: Curve,
    keys: &[S],
) -> io::Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let stem = curve.name().replace('-', "").to_lowercase();
    keys.iter()
        .enumerate()
        .map(|(index, pem)| {
            let path = dir.join(format!("{}-{}.pem", stem, index + 1));
            write_private_key(&path, pem.as_ref())?;
            Ok(path)
        })
        .collect()
}

/// Writes `text` to `path`, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, text: &str) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, text),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}
