use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{Applicant, EmploymentStatus};

/// One registered applicant. Income and expenses are entered independently
/// and are not validated against each other; the scoring model copes with
/// expenses above income.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub employment: EmploymentStatus,
    pub tenure_years: f64,
    pub age: u32,
    pub created_at: DateTime<Utc>,
}

impl Client {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: String,
        last_name: String,
        monthly_income: f64,
        monthly_expenses: f64,
        employment: EmploymentStatus,
        tenure_years: f64,
        age: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            monthly_income,
            monthly_expenses,
            employment,
            tenure_years,
            age,
            created_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Scoring view of the record.
    pub fn applicant(&self) -> Applicant {
        Applicant {
            monthly_income: self.monthly_income,
            monthly_expenses: self.monthly_expenses,
            employment: self.employment,
            tenure_years: self.tenure_years,
            age: self.age,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub version: u32,
    #[serde(default)]
    pub clients: Vec<Client>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a new empty registry with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            clients: Vec::new(),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    /// Match a client by full id or by a unique id prefix, so the CLI does
    /// not require typing whole UUIDs. Returns None when the key matches
    /// nothing or is ambiguous.
    pub fn resolve(&self, key: &str) -> Option<&Client> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        let mut matches = self
            .clients
            .iter()
            .filter(|c| c.id.to_string().starts_with(&key));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None; // Ambiguous prefix
        }
        Some(first)
    }

    /// Insert a client, or replace the existing record with the same id.
    pub fn upsert(&mut self, client: Client) {
        if let Some(existing) = self.clients.iter_mut().find(|c| c.id == client.id) {
            *existing = client;
        } else {
            self.clients.push(client);
        }
    }

    /// Remove a client by id.
    /// Returns true if the client was previously registered, false otherwise.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.clients.len();
        self.clients.retain(|c| c.id != id);
        self.clients.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> Client {
        Client::new(
            "Jean".to_string(),
            "Moumgo".to_string(),
            750_000.0,
            250_000.0,
            EmploymentStatus::Permanent,
            5.0,
            35,
        )
    }

    #[test]
    fn test_new_registry_empty() {
        let registry = Registry::new();
        assert_eq!(registry.version, 1);
        assert!(registry.clients.is_empty());
    }

    #[test]
    fn test_upsert_inserts_then_replaces() {
        let mut registry = Registry::new();
        let mut client = sample_client();
        let id = client.id;
        registry.upsert(client.clone());
        assert_eq!(registry.clients.len(), 1);

        client.monthly_income = 800_000.0;
        registry.upsert(client);
        assert_eq!(registry.clients.len(), 1);
        assert_eq!(registry.get(id).unwrap().monthly_income, 800_000.0);
    }

    #[test]
    fn test_remove() {
        let mut registry = Registry::new();
        let client = sample_client();
        let id = client.id;
        registry.upsert(client);
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.get(id).is_none());
    }

    #[test]
    fn test_resolve_by_prefix() {
        let mut registry = Registry::new();
        let client = sample_client();
        let id = client.id.to_string();
        registry.upsert(client);

        assert!(registry.resolve(&id).is_some());
        assert!(registry.resolve(&id[..8]).is_some());
        assert!(registry.resolve("").is_none());
        assert!(registry.resolve("zzzzzzzz").is_none());
    }

    #[test]
    fn test_resolve_ambiguous_prefix_is_none() {
        let mut registry = Registry::new();
        let mut a = sample_client();
        a.id = Uuid::parse_str("aaaaaaaa-0000-0000-0000-000000000001").unwrap();
        let mut b = sample_client();
        b.id = Uuid::parse_str("aaaaaaaa-0000-0000-0000-000000000002").unwrap();
        registry.upsert(a);
        registry.upsert(b);

        assert!(registry.resolve("aaaaaaaa").is_none());
        assert!(registry
            .resolve("aaaaaaaa-0000-0000-0000-000000000001")
            .is_some());
    }

    #[test]
    fn test_applicant_view() {
        let client = sample_client();
        let applicant = client.applicant();
        assert_eq!(applicant.monthly_income, 750_000.0);
        assert_eq!(applicant.age, 35);
    }

    #[test]
    fn test_full_name() {
        assert_eq!(sample_client().full_name(), "Jean Moumgo");
    }
}
