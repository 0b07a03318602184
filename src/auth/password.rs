use bcrypt::BcryptError;

/// Work factor for stored hashes; existing rows were written with cost 10.
pub const HASH_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, HASH_COST)
}

/// `Ok(false)` on mismatch, `Err` when the stored hash is not a bcrypt hash.
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hashed)
}
