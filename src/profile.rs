use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use crate::error::{Result, TrackerError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub height: String,
    pub weight: String,
    pub position: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum ProfileField {
    Name,
    Height,
    Weight,
    Position,
}

impl ProfileField {
    pub const ALL: [ProfileField; 4] = [
        ProfileField::Name,
        ProfileField::Height,
        ProfileField::Weight,
        ProfileField::Position,
    ];

    fn next(self) -> Self {
        match self {
            ProfileField::Name => ProfileField::Height,
            ProfileField::Height => ProfileField::Weight,
            ProfileField::Weight => ProfileField::Position,
            ProfileField::Position => ProfileField::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            ProfileField::Name => ProfileField::Position,
            ProfileField::Height => ProfileField::Name,
            ProfileField::Weight => ProfileField::Height,
            ProfileField::Position => ProfileField::Weight,
        }
    }
}

/// Editable copy of a profile. Nothing reaches the saved profile until `submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    draft: PlayerProfile,
    focus: ProfileField,
}

impl ProfileForm {
    pub fn new(initial: Option<&PlayerProfile>) -> Self {
        Self {
            draft: initial.cloned().unwrap_or_default(),
            focus: ProfileField::Name,
        }
    }

    pub fn focus(&self) -> ProfileField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.draft.name,
            ProfileField::Height => &self.draft.height,
            ProfileField::Weight => &self.draft.weight,
            ProfileField::Position => &self.draft.position,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ProfileField::Name => &mut self.draft.name,
            ProfileField::Height => &mut self.draft.height,
            ProfileField::Weight => &mut self.draft.weight,
            ProfileField::Position => &mut self.draft.position,
        }
    }

    pub fn push(&mut self, c: char) {
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }

    /// Widest value, for sizing the form
    pub fn max_width(&self) -> usize {
        ProfileField::ALL
            .iter()
            .map(|f| self.value(*f).width())
            .max()
            .unwrap_or(0)
    }

    /// Validate and return the trimmed profile
    pub fn submit(&self) -> Result<PlayerProfile> {
        let profile = PlayerProfile {
            name: self.draft.name.trim().to_string(),
            height: self.draft.height.trim().to_string(),
            weight: self.draft.weight.trim().to_string(),
            position: self.draft.position.trim().to_string(),
        };
        if profile.name.is_empty() {
            return Err(TrackerError::MissingPlayerName);
        }
        Ok(profile)
    }
}

/// Holds the single player. Created once, then edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileHolder {
    profile: Option<PlayerProfile>,
}

impl ProfileHolder {
    pub fn new(profile: Option<PlayerProfile>) -> Self {
        Self { profile }
    }

    pub fn get(&self) -> Option<&PlayerProfile> {
        self.profile.as_ref()
    }

    pub fn is_created(&self) -> bool {
        self.profile.is_some()
    }

    /// Create the profile, or overwrite the existing one field by field
    pub fn save(&mut self, form: &ProfileForm) -> Result<&PlayerProfile> {
        let submitted = form.submit()?;
        let slot = self.profile.get_or_insert_with(PlayerProfile::default);
        *slot = submitted;
        Ok(&*slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn type_into(form: &mut ProfileForm, text: &str) {
        for c in text.chars() {
            form.push(c);
        }
    }

    #[test]
    fn test_form_edits_focused_field() {
        let mut form = ProfileForm::new(None);
        type_into(&mut form, "Sam");
        form.focus_next();
        type_into(&mut form, "6'2\"");
        form.focus_next();
        type_into(&mut form, "190x");
        form.backspace();
        form.focus_next();
        type_into(&mut form, "SG");

        assert_eq!(form.value(ProfileField::Name), "Sam");
        assert_eq!(form.value(ProfileField::Height), "6'2\"");
        assert_eq!(form.value(ProfileField::Weight), "190");
        assert_eq!(form.value(ProfileField::Position), "SG");
        assert_eq!(form.max_width(), 4);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = ProfileForm::new(None);
        form.focus_prev();
        assert_eq!(form.focus(), ProfileField::Position);
        form.focus_next();
        assert_eq!(form.focus(), ProfileField::Name);
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut form = ProfileForm::new(None);
        type_into(&mut form, "   ");
        let mut holder = ProfileHolder::default();
        assert_matches!(holder.save(&form), Err(TrackerError::MissingPlayerName));
        assert!(!holder.is_created());
    }

    #[test]
    fn test_create_then_edit_in_place() {
        let mut holder = ProfileHolder::default();
        let mut form = ProfileForm::new(None);
        type_into(&mut form, " Jo ");
        assert_eq!(holder.save(&form).unwrap().name, "Jo");

        let mut edit = ProfileForm::new(holder.get());
        edit.focus_prev();
        type_into(&mut edit, "C");
        holder.save(&edit).unwrap();

        let saved = holder.get().unwrap();
        assert_eq!(saved.name, "Jo");
        assert_eq!(saved.position, "C");
    }
}
