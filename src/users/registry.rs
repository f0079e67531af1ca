use thiserror::Error;

use super::dto::{User, UserPayload};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Email already exists")]
    DuplicateEmail,
    #[error("User not found")]
    NotFound,
}

/// In-memory user store. Owns the record list and the next-id counter;
/// every mutation goes through here, behind the state's mutex.
#[derive(Debug)]
pub struct Registry {
    users: Vec<User>,
    next_id: i64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// All users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.users.clone()
    }

    /// Appends a new record, assigning the next id. Emails must be unique
    /// across the registry (case-sensitive exact match).
    pub fn create(&mut self, payload: UserPayload) -> Result<User, RegistryError> {
        if self.users.iter().any(|u| u.email == payload.email) {
            return Err(RegistryError::DuplicateEmail);
        }

        let user = User {
            id: self.next_id,
            name: payload.name,
            age: payload.age,
            email: payload.email,
        };
        self.next_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }

    pub fn get(&self, id: i64) -> Result<User, RegistryError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound)
    }

    /// Replaces the fields of the record with the given id. The id itself is
    /// the lookup key and never changes. Email uniqueness is only enforced
    /// on create; an update may set an email already held by another record.
    pub fn update(&mut self, id: i64, payload: UserPayload) -> Result<User, RegistryError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RegistryError::NotFound)?;

        user.name = payload.name;
        user.age = payload.age;
        user.email = payload.email;
        Ok(user.clone())
    }

    /// Removes the record with the given id, preserving the order of the
    /// remaining records.
    pub fn delete(&mut self, id: i64) -> Result<(), RegistryError> {
        let pos = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(RegistryError::NotFound)?;
        self.users.remove(pos);
        Ok(())
    }
}
