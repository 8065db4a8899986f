use std::{
    convert::Infallible,
    fmt,
    fs::File,
    io::Read,
    path::{Path, PathBuf},
    str::FromStr,
};

use rand::{rngs::OsRng, RngCore};

use crate::error::{Error, Result};

/// The non-blocking kernel random device.
pub const URANDOM: &str = "/dev/urandom";

/// The kernel random device. On some systems reads block until enough entropy is gathered.
pub const RANDOM: &str = "/dev/random";

/// Where random bytes come from.
///
/// A `Source` is parsed from text: `"fast"` and `"secure"` select the generators, anything else
/// is taken as the path of a device file.
///
/// # Example
/// ```
/// # use devrand::Source;
/// let source: Source = "/dev/urandom".parse().unwrap();
/// assert_eq!(source, Source::urandom());
/// assert_eq!("fast".parse::<Source>().unwrap(), Source::Fast);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// The seeded, non-cryptographic generator owned by an [`Entropy`](crate::Entropy).
    Fast,
    /// The platform's cryptographically secure generator.
    Secure,
    /// A device file that yields random bytes when read. Every read opens and closes the file,
    /// and a blocking device stalls the caller without a timeout.
    Device(PathBuf),
}

impl Source {
    pub fn device(path: impl Into<PathBuf>) -> Self {
        Source::Device(path.into())
    }

    pub fn urandom() -> Self {
        Source::device(URANDOM)
    }

    pub fn random() -> Self {
        Source::device(RANDOM)
    }
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "fast" => Source::Fast,
            "secure" => Source::Secure,
            path => Source::device(path),
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Fast => f.write_str("fast"),
            Source::Secure => f.write_str("secure"),
            Source::Device(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fills `buf` from the platform's secure generator.
pub(crate) fn fill_secure(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf)?;
    Ok(())
}

/// Opens `path`, fills `buf` from it and closes it again. A device that runs dry before `buf` is
/// full is an error.
pub(crate) fn fill_device(path: &Path, buf: &mut [u8]) -> Result<()> {
    let device_error = |source: std::io::Error| Error::Device {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(device_error)?;
    let mut read = 0;
    while read < buf.len() {
        match file.read(&mut buf[read..]) {
            Ok(0) => break,
            Ok(n) => read += n,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(device_error(err)),
        }
    }
    if read < buf.len() {
        return Err(Error::ShortRead {
            path: path.to_path_buf(),
            expected: buf.len(),
            read,
        });
    }
    Ok(())
}
