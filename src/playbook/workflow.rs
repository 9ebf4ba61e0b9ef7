//! The TikTok Wattpad imagines workflow definition.

use crate::model::{
    AssetType, CaptionTemplate, CostTier, HashtagGroup, ModuleField, ModuleStep, PostingSchedule,
    ToolReference, WorkflowAsset, WorkflowDefinition, WorkflowModule,
};

/// Assemble the built-in workflow definition.
pub fn definition() -> WorkflowDefinition {
    WorkflowDefinition {
        title: "TikTok Wattpad Imagines Automation Blueprint".to_string(),
        narrative: "Every posting window, Pabbly Connect searches YouTube for fresh Wattpad \
                    imagine videos, scores them by engagement, files the best picks in Google \
                    Drive with a ready-to-paste caption, books a calendar slot and logs \
                    everything to a sheet so posting to TikTok takes minutes."
            .to_string(),
        goal: "Queue three high-engagement Wattpad imagine clips per day for TikTok with \
               captions, hashtags and posting times prepared automatically."
            .to_string(),
        key_tools: tools(),
        modules: modules(),
        assets: assets(),
        posting: PostingSchedule {
            timing_label: "Three daily drops".to_string(),
            timezone: "America/New_York".to_string(),
            recommended_slots: vec![
                "09:00 EST".to_string(),
                "13:00 EST".to_string(),
                "18:00 EST".to_string(),
            ],
            rationale: "Morning commute, lunch break and after-school scrolling are when the \
                        BookTok audience is most active; spacing posts four to five hours apart \
                        keeps each clip in the For You feed long enough to pick up momentum."
                .to_string(),
        },
        caption_template: CaptionTemplate {
            approach: "Open with the trope as a hook, name the fandom, credit the original \
                       creator and close with a question that invites comments."
                .to_string(),
            prompt: "Write a TikTok caption under 150 characters for a Wattpad imagine video \
                     titled \"{{title}}\". Start with a hook about the trope, mention the \
                     fandom, end with a question for viewers. No emojis at the start."
                .to_string(),
            structure: vec![
                "Hook: the trope in five words or fewer".to_string(),
                "Context: fandom or character name".to_string(),
                "Credit: original channel handle".to_string(),
                "Engagement: one question for the comments".to_string(),
                "Hashtags: core pack plus one rotating pack".to_string(),
            ],
        },
        hashtags: hashtags(),
    }
}

fn tools() -> Vec<ToolReference> {
    vec![
        ToolReference::new(
            "Pabbly Connect",
            "https://www.pabbly.com/connect/",
            "No-code automation hub that runs the scheduler, API calls, code steps and app actions",
            CostTier::Freemium,
        ),
        ToolReference::new(
            "YouTube Data API v3",
            "https://developers.google.com/youtube/v3",
            "Search and statistics endpoints used to discover trending imagine videos",
            CostTier::Free,
        ),
        ToolReference::new(
            "Google Drive",
            "https://drive.google.com",
            "Stores downloaded clips in a shared folder",
            CostTier::Free,
        ),
        ToolReference::new(
            "Google Sheets",
            "https://sheets.google.com",
            "Queue of curated clips with captions, hashtags and posting windows",
            CostTier::Free,
        ),
        ToolReference::new(
            "Google Calendar",
            "https://calendar.google.com",
            "Posting calendar with one event per scheduled clip",
            CostTier::Free,
        ),
        ToolReference::new(
            "Gmail",
            "https://mail.google.com",
            "Delivers the daily digest of queued posts",
            CostTier::Free,
        ),
    ]
}

fn modules() -> Vec<WorkflowModule> {
    vec![
        WorkflowModule::trigger(
            "scheduler",
            "Scheduler Trigger",
            "Starts the pipeline ahead of each posting window.",
        )
        .with_step(
            ModuleStep::new(
                "schedule-trigger",
                "Run at posting windows",
                "Scheduler by Pabbly",
                "Advanced > Specific Times",
                "Fires the workflow three times a day, one hour before each posting slot.",
            )
            .with_field(ModuleField::new("Times", "08:00, 12:00, 17:00"))
            .with_field(ModuleField::new("Timezone", "America/New_York"))
            .with_field(
                ModuleField::new("Days", "Every day")
                    .with_notes("Limit to weekdays while testing to save task credits."),
            ),
        ),
        WorkflowModule::action(
            "discovery",
            "YouTube Discovery",
            "Finds recent Wattpad imagine videos and pulls their engagement statistics.",
        )
        .with_step(
            ModuleStep::new(
                "youtube-search",
                "Search recent imagine videos",
                "API by Pabbly",
                "Execute API Request (GET)",
                "Queries the YouTube search endpoint for videos published in the last 48 hours.",
            )
            .with_field(ModuleField::new("URL", "https://www.googleapis.com/youtube/v3/search"))
            .with_field(ModuleField::new(
                "Query Params",
                "part=snippet&type=video&q=wattpad imagine&order=viewCount&maxResults=25",
            ))
            .with_field(
                ModuleField::new("publishedAfter", "{{Scheduler: Date - 48 hours | ISO 8601}}")
                    .with_notes("Use the Date/Time Formatter to subtract 48 hours."),
            )
            .with_field(
                ModuleField::new("key", "YOUR_YOUTUBE_API_KEY")
                    .with_notes("Restrict the key to the YouTube Data API."),
            ),
        )
        .with_step(
            ModuleStep::new(
                "youtube-stats",
                "Fetch video statistics",
                "API by Pabbly",
                "Execute API Request (GET)",
                "Looks up view, like and comment counts for every search result.",
            )
            .with_field(ModuleField::new("URL", "https://www.googleapis.com/youtube/v3/videos"))
            .with_field(ModuleField::new("part", "snippet,statistics,contentDetails"))
            .with_field(ModuleField::new("id", "{{youtube-search: items.id.videoId | join(',')}}"))
            .with_field(ModuleField::new("key", "YOUR_YOUTUBE_API_KEY")),
        )
        .with_step(
            ModuleStep::new(
                "normalize-items",
                "Normalize line items",
                "Line Itemizer by Pabbly",
                "Create Line Items",
                "Turns the statistics response into a flat list the code step can read.",
            )
            .with_field(ModuleField::new("Title", "{{youtube-stats: items.snippet.title}}"))
            .with_field(ModuleField::new("Video ID", "{{youtube-stats: items.id}}"))
            .with_field(ModuleField::new(
                "Channel",
                "{{youtube-stats: items.snippet.channelTitle}}",
            ))
            .with_field(ModuleField::new(
                "Published",
                "{{youtube-stats: items.snippet.publishedAt}}",
            ))
            .with_field(ModuleField::new("Views", "{{youtube-stats: items.statistics.viewCount}}"))
            .with_field(ModuleField::new("Likes", "{{youtube-stats: items.statistics.likeCount}}"))
            .with_field(ModuleField::new(
                "Comments",
                "{{youtube-stats: items.statistics.commentCount}}",
            )),
        ),
        WorkflowModule::action(
            "curation",
            "Scoring & Caption Builder",
            "Ranks candidates by engagement velocity and drafts captions for the top picks.",
        )
        .with_step(
            ModuleStep::new(
                "score-videos",
                "Score and caption top videos",
                "Code by Pabbly",
                "Run JavaScript",
                "Runs the scoring snippet below and returns the three best clips with captions.",
            )
            .with_field(ModuleField::new("Input: items", "{{normalize-items: line items}}"))
            .with_field(ModuleField::new("Input: slots", "09:00,13:00,18:00"))
            .with_notes("Paste the Scoring & Caption Builder snippet into the code editor."),
        )
        .with_step(
            ModuleStep::new(
                "iterate-picks",
                "Iterate over picks",
                "Iterator by Pabbly",
                "Iterate Array",
                "Runs the delivery module once per curated clip.",
            )
            .with_field(ModuleField::new("Array", "{{score-videos: output.picks}}")),
        ),
        WorkflowModule::action(
            "delivery",
            "Asset Delivery",
            "Downloads each pick, files it in Drive, books a calendar slot and logs the row.",
        )
        .with_step(
            ModuleStep::new(
                "fetch-stream",
                "Resolve download link",
                "API by Pabbly",
                "Execute API Request (POST)",
                "Asks a free downloader API for a direct MP4 link to the clip.",
            )
            .with_field(ModuleField::new("URL", "https://api.cobalt.tools/"))
            .with_field(ModuleField::new("Body", "{\"url\": \"{{iterate-picks: url}}\"}"))
            .with_field(ModuleField::new("Headers", "Accept: application/json"))
            .with_notes(
                "Only repost clips you have permission to use and always credit the creator.",
            ),
        )
        .with_step(
            ModuleStep::new(
                "drive-upload",
                "Upload clip to Drive",
                "Google Drive",
                "Upload File",
                "Saves the MP4 into the shared pipeline folder.",
            )
            .with_field(ModuleField::new("Folder", "TikTok Wattpad Pipeline"))
            .with_field(ModuleField::new("File URL", "{{fetch-stream: url}}"))
            .with_field(ModuleField::new("File Name", "{{iterate-picks: fileName}}")),
        )
        .with_step(
            ModuleStep::new(
                "calendar-event",
                "Book posting slot",
                "Google Calendar",
                "Create Event",
                "Adds a reminder event with the caption and Drive link for the posting window.",
            )
            .with_field(ModuleField::new("Calendar", "TikTok Posting Calendar"))
            .with_field(ModuleField::new("Start", "{{iterate-picks: startLocal}}"))
            .with_field(ModuleField::new("End", "{{iterate-picks: endLocal}}"))
            .with_field(ModuleField::new(
                "Description",
                "{{iterate-picks: caption}} {{drive-upload: webViewLink}}",
            )),
        )
        .with_step(
            ModuleStep::new(
                "sheet-log",
                "Log to queue sheet",
                "Google Sheets",
                "Add New Row",
                "Appends the pick to the Queue tab for tracking.",
            )
            .with_field(ModuleField::new("Spreadsheet", "TikTok Wattpad Pipeline"))
            .with_field(ModuleField::new("Sheet", "Queue"))
            .with_field(
                ModuleField::new("Row", "Map each column from the iterator and Drive outputs")
                    .with_notes("Column order must match the sheet header template."),
            ),
        ),
        WorkflowModule::action(
            "digest",
            "Daily Digest",
            "Summarizes the queued posts and sends them to the operator.",
        )
        .with_step(
            ModuleStep::new(
                "build-digest",
                "Format digest",
                "Code by Pabbly",
                "Run JavaScript",
                "Runs the digest formatter snippet over the curated picks.",
            )
            .with_field(ModuleField::new("Input: picks", "{{score-videos: output.picks}}"))
            .with_field(ModuleField::new("Input: timezone", "America/New_York")),
        )
        .with_step(
            ModuleStep::new(
                "send-digest",
                "Email digest",
                "Gmail",
                "Send Email",
                "Emails the formatted digest so posting can be done from a phone.",
            )
            .with_field(ModuleField::new("To", "you@example.com"))
            .with_field(ModuleField::new("Subject", "{{build-digest: subject}}"))
            .with_field(ModuleField::new("Body", "{{build-digest: html}}"))
            .with_notes("Swap in Slack > Send Channel Message if you prefer chat alerts."),
        ),
    ]
}

fn assets() -> Vec<WorkflowAsset> {
    vec![
        WorkflowAsset::new(
            AssetType::Video,
            "Vertical MP4 of each curated imagine clip",
            "MP4 (up to 1080p)",
            "Google Drive folder",
        ),
        WorkflowAsset::new(
            AssetType::Caption,
            "Hook-first caption with credit line and hashtags",
            "Plain text",
            "Google Sheets row and calendar event description",
        ),
        WorkflowAsset::new(
            AssetType::Schedule,
            "Posting slot per clip in the posting calendar",
            "Calendar event",
            "Google Calendar and Gmail digest",
        ),
    ]
}

fn hashtags() -> Vec<HashtagGroup> {
    vec![
        HashtagGroup::new("Core", ["#wattpad", "#imagines", "#booktok", "#wattpadstories"]),
        HashtagGroup::new("Fandom", ["#kpopimagines", "#harrypotterimagines", "#mhaimagines"]),
        HashtagGroup::new("Discovery", ["#fyp", "#foryoupage", "#storytime", "#booktoker"]),
    ]
}
