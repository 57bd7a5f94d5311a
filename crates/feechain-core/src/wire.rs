//! Binary wire codec for subjects.
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! sigLen(2) | signature(sigLen) | keyLen(1) | key(keyLen) |
//! version(1) | kind(1) | amount(8) | previous(remaining bytes)
//! ```
//!
//! The signature covers exactly the bytes from `keyLen` onward (the
//! Message); the length prefix and signature are not themselves signed.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bytes::{BufMut, Bytes, BytesMut};

use crate::crypto::{Signer, Verifier};
use crate::error::CodecError;
use crate::pem;
use crate::subject::{Subject, MAX_KEY_LEN, MAX_SIG_LEN};

/// Build the signed Message for a subject.
///
/// `keyLen(1) || key || version(1) || kind(1) || amount(8BE) || previous`.
fn message_bytes(
    raw_key: &[u8],
    version: u8,
    kind: u8,
    amount: u64,
    previous: &[u8],
) -> Result<Vec<u8>, CodecError> {
    if raw_key.len() > MAX_KEY_LEN {
        return Err(CodecError::KeyTooLarge { len: raw_key.len() });
    }

    let mut buf = BytesMut::with_capacity(1 + raw_key.len() + 10 + previous.len());
    buf.put_u8(raw_key.len() as u8);
    buf.put_slice(raw_key);
    buf.put_u8(version);
    buf.put_u8(kind);
    buf.put_u64(amount);
    buf.put_slice(previous);
    Ok(buf.to_vec())
}

/// Encode and sign a subject into wire bytes.
///
/// The public key arrives armored; it travels raw on the wire. The signer
/// returns its signature in base64, which is decoded before framing.
pub fn encode_subject(subject: &Subject, signer: &impl Signer) -> Result<Bytes, CodecError> {
    let key_b64 = pem::strip_armor(&subject.public_key_pem);
    let raw_key = BASE64.decode(key_b64)?;
    let previous = BASE64.decode(&subject.previous)?;

    let message = message_bytes(
        &raw_key,
        subject.version,
        subject.kind,
        subject.amount,
        &previous,
    )?;

    let signature_b64 = signer
        .sign(&message)
        .map_err(|e| CodecError::Signer(e.0))?;
    let signature = BASE64.decode(signature_b64)?;
    if signature.len() > MAX_SIG_LEN {
        return Err(CodecError::SignatureTooLarge {
            len: signature.len(),
        });
    }

    let mut out = BytesMut::with_capacity(2 + signature.len() + message.len());
    out.put_u16(signature.len() as u16);
    out.put_slice(&signature);
    out.put_slice(&message);
    Ok(out.freeze())
}

/// Encode and sign a subject, returning the base64 transport form.
pub fn encode_subject_base64(subject: &Subject, signer: &impl Signer) -> Result<String, CodecError> {
    let bytes = encode_subject(subject, signer)?;
    Ok(BASE64.encode(bytes))
}

/// Decode a subject from its base64 transport form and verify its signature.
///
/// Parses strictly in wire order with bounds-checked reads; a buffer shorter
/// than a declared length fails with [`CodecError::MalformedSubject`]. The
/// raw key is re-armored before the verifier sees it.
pub fn decode_subject(subject_b64: &str, verifier: &impl Verifier) -> Result<Subject, CodecError> {
    let bytes = BASE64.decode(subject_b64)?;
    let mut reader = Reader::new(&bytes);

    let sig_len = reader.read_u16("signature length")? as usize;
    let signature = reader.read_slice(sig_len, "signature")?;
    let signature_b64 = BASE64.encode(signature);

    // Everything after the signature is the signed Message.
    let message = reader.rest().to_vec();

    let key_len = reader.read_u8("key length")? as usize;
    let raw_key = reader.read_slice(key_len, "public key")?.to_vec();
    let version = reader.read_u8("version")?;
    let kind = reader.read_u8("kind")?;
    let amount = reader.read_u64("amount")?;
    let previous_bytes = reader.rest();
    let previous = if previous_bytes.is_empty() {
        String::new()
    } else {
        BASE64.encode(previous_bytes)
    };

    let public_key_pem = pem::armor_bytes(&raw_key);

    let verified = verifier
        .verify(&message, &signature_b64, &public_key_pem)
        .map_err(|e| CodecError::Verifier(e.0))?;
    if !verified {
        return Err(CodecError::InvalidSignature);
    }

    Ok(Subject {
        version,
        kind,
        amount,
        public_key_pem,
        previous,
    })
}

/// Bounds-checked sequential reader over the wire bytes.
struct Reader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    fn read_slice(&mut self, len: usize, field: &str) -> Result<&'a [u8], CodecError> {
        let end = self.offset.checked_add(len).filter(|&e| e <= self.buf.len());
        match end {
            Some(end) => {
                let slice = &self.buf[self.offset..end];
                self.offset = end;
                Ok(slice)
            }
            None => Err(CodecError::MalformedSubject(format!(
                "truncated while reading {field}: need {len} bytes at offset {}, have {}",
                self.offset,
                self.buf.len() - self.offset
            ))),
        }
    }

    fn read_u8(&mut self, field: &str) -> Result<u8, CodecError> {
        Ok(self.read_slice(1, field)?[0])
    }

    fn read_u16(&mut self, field: &str) -> Result<u16, CodecError> {
        let slice = self.read_slice(2, field)?;
        Ok(u16::from_be_bytes([slice[0], slice[1]]))
    }

    fn read_u64(&mut self, field: &str) -> Result<u64, CodecError> {
        let slice = self.read_slice(8, field)?;
        let mut arr = [0u8; 8];
        arr.copy_from_slice(slice);
        Ok(u64::from_be_bytes(arr))
    }

    /// The unread remainder, without consuming it.
    fn rest(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }
}
