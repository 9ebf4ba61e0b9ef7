//! Implementation checklist and sheet header template.

use crate::model::{ChecklistSection, SetupGuide};

/// Header row of the `Queue` tab, matching the columns the sheet step maps.
pub const SHEET_HEADERS: [&str; 14] = [
    "Timestamp",
    "Video Title",
    "Channel",
    "Publish Date",
    "Views",
    "Comments",
    "Engagement Score",
    "Caption",
    "Hashtags",
    "Posting Window",
    "Start Local",
    "End Local",
    "Timezone",
    "Drive Link",
];

/// Build the setup guide.
pub fn guide() -> SetupGuide {
    SetupGuide {
        checklist: vec![
            ChecklistSection::new(
                "Create Google Cloud project & enable YouTube API",
                [
                    "Visit console.cloud.google.com and create a project called \
                     \"TikTok Wattpad Pipeline\".",
                    "Enable YouTube Data API v3, create an API key and restrict it to that API.",
                ],
            ),
            ChecklistSection::new(
                "Prepare Google Workspace connectors",
                [
                    "Create a Google Drive folder named \"TikTok Wattpad Pipeline\" and share it \
                     with link access.",
                    "Create a Google Sheet with the same name and a tab called `Queue` holding \
                     the header row below.",
                    "Create a separate Google Calendar titled \"TikTok Posting Calendar\".",
                ],
            ),
            ChecklistSection::new(
                "Build the Pabbly Connect workflow",
                [
                    "Add the Scheduler trigger (Advanced > Specific Times) with the 08:00, 12:00 \
                     and 17:00 entries.",
                    "Insert the API by Pabbly steps for YouTube search and statistics.",
                    "Normalize line items, then drop in the scoring code step to curate top \
                     videos.",
                    "Attach an Iterator after the code output and wire the download, Drive, \
                     Calendar and Sheets actions.",
                    "Finish with the digest code step and the Gmail (or Slack) notification.",
                ],
            ),
            ChecklistSection::new(
                "Test & activate",
                [
                    "Click \"Save & Send Test Request\" on each step using recent sample data.",
                    "Verify the Drive uploads, calendar events and sheet rows match expectations.",
                    "Switch the workflow to live once validation passes.",
                ],
            ),
        ],
        sheet_tab: "Queue".to_string(),
        sheet_headers: SHEET_HEADERS.iter().map(ToString::to_string).collect(),
    }
}
