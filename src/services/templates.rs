use rusqlite::Connection;

use crate::db::queries;
use crate::models::Personalization;

/// Substitute `{name}` placeholders by name. The personalization values
/// always carry every known field (defaults applied upstream), so
/// substitution cannot fail; unrecognized placeholders pass through
/// untouched.
pub fn render(template: &str, personalization: &Personalization) -> String {
    let mut body = template.to_string();
    for (name, value) in personalization.fields() {
        body = body.replace(&format!("{{{name}}}"), value);
    }
    body
}

/// Look up the template configured for (campaign, day) and render it.
/// `Ok(None)` means the campaign has no message for that day, which is a
/// normal outcome, not an error.
pub fn resolve(
    conn: &Connection,
    campaign_id: &str,
    campaign_day: i64,
    personalization: &Personalization,
) -> Result<Option<String>, rusqlite::Error> {
    let Some(template) = queries::get_template(conn, campaign_id, campaign_day)? else {
        return Ok(None);
    };

    Ok(Some(render(&template, personalization)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::models::campaign::{DEFAULT_MLS, DEFAULT_REALTOR_NAME, DEFAULT_TM_NAME};

    #[test]
    fn test_render_substitutes_all_fields() {
        let p = Personalization::resolve(
            Some("Jane".to_string()),
            Some("Tom".to_string()),
            Some("MLS-7".to_string()),
        );
        let out = render("Hi, {realtor_name} listed {mls}. - {tm_name}", &p);
        assert_eq!(out, "Hi, Jane listed MLS-7. - Tom");
    }

    #[test]
    fn test_render_uses_defaults_when_fields_omitted() {
        let p = Personalization::default();
        let out = render("{realtor_name} / {tm_name} / {mls}", &p);
        assert_eq!(
            out,
            format!("{DEFAULT_REALTOR_NAME} / {DEFAULT_TM_NAME} / {DEFAULT_MLS}")
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let p = Personalization::default();
        let out = render("{realtor_name} {whatever}", &p);
        assert!(out.contains("{whatever}"));
    }

    #[test]
    fn test_resolve_missing_template_is_none() {
        let conn = db::init_db(":memory:").unwrap();
        let result = resolve(&conn, "nope", 1, &Personalization::default()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_resolve_renders_configured_template() {
        let conn = db::init_db(":memory:").unwrap();
        queries::upsert_template(&conn, "spring", 2, "Day two from {tm_name}").unwrap();

        let result = resolve(&conn, "spring", 2, &Personalization::default())
            .unwrap()
            .unwrap();
        assert_eq!(result, format!("Day two from {DEFAULT_TM_NAME}"));
    }
}
