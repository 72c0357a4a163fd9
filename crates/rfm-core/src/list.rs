//! The ordered referral sequence.

use rfm_model::{Referral, ReferralDraft, ReferralId};

use crate::error::{ListError, Result};

/// Ordered, in-memory list of referrals.
///
/// Identities are unique within the list. Add appends at the end, edit keeps
/// the record's position and delete removes in place; no operation touches
/// any record other than its target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferralList {
    referrals: Vec<Referral>,
}

impl ReferralList {
    /// Wrap an already-validated sequence of records.
    pub fn new(referrals: Vec<Referral>) -> Self {
        Self { referrals }
    }

    pub fn as_slice(&self) -> &[Referral] {
        &self.referrals
    }

    pub fn len(&self) -> usize {
        self.referrals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.referrals.is_empty()
    }

    /// Index of the record with this identity.
    pub fn position(&self, id: ReferralId) -> Option<usize> {
        self.referrals.iter().position(|r| r.id == id)
    }

    /// Record with this identity.
    pub fn get(&self, id: ReferralId) -> Option<&Referral> {
        self.referrals.iter().find(|r| r.id == id)
    }

    /// Identity for the next added record: max existing identity + 1, or 1
    /// when the list is empty.
    ///
    /// Fails with [`ListError::IdsExhausted`] once the maximum is `u32::MAX`.
    pub fn next_id(&self) -> Result<ReferralId> {
        match self.referrals.iter().map(|r| r.id).max() {
            None => Ok(ReferralId::FIRST),
            Some(last) => last.next().ok_or(ListError::IdsExhausted { last }),
        }
    }

    /// Append a new record built from the draft and the selected country.
    pub fn add(&mut self, draft: &ReferralDraft, country: &str) -> Result<ReferralId> {
        let id = self.next_id()?;
        self.referrals.push(draft.to_referral(id, country));
        tracing::debug!("Added referral {}", id);
        Ok(id)
    }

    /// Replace the record with this identity, keeping its position.
    pub fn edit(&mut self, id: ReferralId, draft: &ReferralDraft, country: &str) -> Result<()> {
        let index = self.position(id).ok_or(ListError::NotFound { id })?;
        self.referrals[index] = draft.to_referral(id, country);
        tracing::debug!("Edited referral {} at position {}", id, index);
        Ok(())
    }

    /// Remove the record with this identity and return it.
    pub fn delete(&mut self, id: ReferralId) -> Result<Referral> {
        let index = self.position(id).ok_or(ListError::NotFound { id })?;
        let removed = self.referrals.remove(index);
        tracing::debug!("Deleted referral {}", id);
        Ok(removed)
    }
}

impl From<Vec<Referral>> for ReferralList {
    fn from(referrals: Vec<Referral>) -> Self {
        Self::new(referrals)
    }
}
