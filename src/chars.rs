use crate::{
    alphabet,
    entropy::Entropy,
    error::{Error, Result},
    source::Source,
};

impl Entropy {
    /// Returns `length` characters drawn uniformly from `alphabet`.
    ///
    /// # Errors
    /// [`Error::InvalidLength`] if `length` is zero, [`Error::EmptyAlphabet`] if there is nothing
    /// to draw from, or the failure of the source.
    ///
    /// # Example
    /// ```
    /// # use devrand::{alphabet::NUMBER, Entropy, Source};
    /// let pin = Entropy::new().chars(4, NUMBER, &Source::Secure).unwrap();
    /// assert!(pin.chars().all(|c| c.is_ascii_digit()));
    /// ```
    pub fn chars(&self, length: usize, alphabet: &[char], source: &Source) -> Result<String> {
        if length == 0 {
            return Err(Error::InvalidLength);
        }
        if alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        let mut out = String::with_capacity(length);
        for _ in 0..length {
            let index = self.int63n(alphabet.len() as i64, source)?;
            out.push(alphabet[index as usize]);
        }
        Ok(out)
    }

    /// Returns `length` raw random bytes as a string, one character per byte.
    ///
    /// No alphabet is involved: each byte becomes the character with the same code point, so the
    /// result may contain control characters and anything in `U+0000..=U+00FF`.
    pub fn string(&self, length: usize, source: &Source) -> Result<String> {
        let bytes = self.bytes(length, source)?;
        Ok(bytes.into_iter().map(char::from).collect())
    }

    /// [`string`](Self::string) from `/dev/urandom`.
    pub fn string_urandom(&self, length: usize) -> Result<String> {
        self.string(length, &Source::urandom())
    }

    /// [`string`](Self::string) from `/dev/random`. May block.
    pub fn string_random(&self, length: usize) -> Result<String> {
        self.string(length, &Source::random())
    }

    /// [`string`](Self::string) from the fast generator.
    pub fn string_fast(&self, length: usize) -> Result<String> {
        self.string(length, &Source::Fast)
    }

    /// [`string`](Self::string) from the secure generator.
    pub fn string_secure(&self, length: usize) -> Result<String> {
        self.string(length, &Source::Secure)
    }

    /// Returns `prefix` followed by `count` secure random digits and letters, then `.extension`
    /// unless `extension` is empty.
    ///
    /// # Example
    /// ```
    /// # use devrand::Entropy;
    /// let name = Entropy::new().file_name("upload-", "tmp", 8).unwrap();
    /// assert!(name.starts_with("upload-") && name.ends_with(".tmp"));
    /// assert_eq!(name.len(), "upload-".len() + 8 + ".tmp".len());
    /// ```
    pub fn file_name(&self, prefix: &str, extension: &str, count: usize) -> Result<String> {
        let name = self.chars(count, alphabet::NUMBER_LETTERS, &Source::Secure)?;
        if extension.is_empty() {
            Ok(format!("{prefix}{name}"))
        } else {
            Ok(format!("{prefix}{name}.{extension}"))
        }
    }
}
