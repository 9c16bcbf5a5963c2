//! Fixed field lists requested from the REST API.

use dailytv_core::models::QueryKind;

/// Fields requested for channel listings.
pub const CHANNEL_FIELDS: &[&str] = &["id", "item_type", "name"];

/// Fields requested for user listings.
pub const USER_FIELDS: &[&str] = &["avatar_360_url", "id", "item_type", "screenname"];

/// Fields requested for video listings.
pub const VIDEO_FIELDS: &[&str] = &[
    "description",
    "duration",
    "id",
    "item_type",
    "mode",
    "owner",
    "thumbnail_480_url",
    "title",
    "views_total",
];

/// Field list for a query kind.
#[must_use]
pub const fn fields_for(kind: QueryKind) -> &'static [&'static str] {
    match kind {
        QueryKind::Channels => CHANNEL_FIELDS,
        QueryKind::ChannelTopUsers => USER_FIELDS,
        QueryKind::ChannelVideos | QueryKind::SearchVideos => VIDEO_FIELDS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_no_duplicates(fields: &[&str]) {
        let unique: HashSet<_> = fields.iter().collect();
        assert_eq!(unique.len(), fields.len());
    }

    #[test]
    fn test_field_lists_have_no_duplicates() {
        assert_no_duplicates(CHANNEL_FIELDS);
        assert_no_duplicates(USER_FIELDS);
        assert_no_duplicates(VIDEO_FIELDS);
    }

    #[test]
    fn test_field_list_order_is_fixed() {
        assert_eq!(CHANNEL_FIELDS, ["id", "item_type", "name"]);
        assert_eq!(USER_FIELDS[0], "avatar_360_url");
        assert_eq!(VIDEO_FIELDS[0], "description");
        assert_eq!(VIDEO_FIELDS[VIDEO_FIELDS.len() - 1], "views_total");
    }

    #[test]
    fn test_fields_for_kind() {
        assert_eq!(fields_for(QueryKind::Channels), CHANNEL_FIELDS);
        assert_eq!(fields_for(QueryKind::ChannelTopUsers), USER_FIELDS);
        assert_eq!(fields_for(QueryKind::ChannelVideos), VIDEO_FIELDS);
        assert_eq!(fields_for(QueryKind::SearchVideos), VIDEO_FIELDS);
    }
}
