//! JavaScript snippets pasted into the "Code by Pabbly" steps.
//!
//! Kept as literal text. They run inside the automation platform, never here.

use crate::model::{CodeArtifact, CodeArtifacts, ValidationError, DIGEST, SCORING};

/// Scores candidate videos and builds captions for the top picks.
pub const SCORING_SOURCE: &str = r##"// Inputs: items (line items from normalize-items), slots ("09:00,13:00,18:00")
const items = Array.isArray(input.items) ? input.items : JSON.parse(input.items || "[]");
const slots = String(input.slots || "09:00,13:00,18:00").split(",").map((s) => s.trim());
const now = Date.now();

const HASHTAGS = {
  core: ["#wattpad", "#imagines", "#booktok", "#wattpadstories"],
  rotating: [
    ["#kpopimagines", "#fyp"],
    ["#harrypotterimagines", "#foryoupage"],
    ["#mhaimagines", "#storytime"],
  ],
};

function score(item) {
  const views = Number(item.Views || 0);
  const likes = Number(item.Likes || 0);
  const comments = Number(item.Comments || 0);
  const ageHours = Math.max(1, (now - new Date(item.Published).getTime()) / 36e5);
  // Comments weigh most: they signal a story people want to talk about.
  const engagement = views * 0.6 + likes * 2 + comments * 4;
  return Math.round((engagement / ageHours) * 100) / 100;
}

function caption(item, index) {
  const title = String(item.Title || "").replace(/\s+/g, " ").trim();
  const hook = title.length > 60 ? `${title.slice(0, 57)}...` : title;
  const tags = [...HASHTAGS.core, ...HASHTAGS.rotating[index % HASHTAGS.rotating.length]];
  return {
    text: `${hook} 📖 Which part got you? (via @${item.Channel})`,
    hashtags: tags.join(" "),
  };
}

function postingWindow(slot) {
  const [hours, minutes] = slot.split(":").map(Number);
  const start = new Date();
  start.setHours(hours, minutes, 0, 0);
  const end = new Date(start.getTime() + 15 * 60 * 1000);
  return { startLocal: start.toISOString(), endLocal: end.toISOString() };
}

const picks = items
  .map((item) => ({ ...item, score: score(item) }))
  .sort((a, b) => b.score - a.score)
  .slice(0, slots.length)
  .map((item, index) => {
    const { text, hashtags } = caption(item, index);
    return {
      title: item.Title,
      channel: item.Channel,
      published: item.Published,
      views: Number(item.Views || 0),
      comments: Number(item.Comments || 0),
      score: item.score,
      url: `https://www.youtube.com/watch?v=${item["Video ID"]}`,
      fileName: `${slots[index].replace(":", "")}-${item["Video ID"]}.mp4`,
      caption: `${text}\n\n${hashtags}`,
      hashtags,
      window: slots[index],
      ...postingWindow(slots[index]),
    };
  });

return { picks, count: picks.length };"##;

/// Formats the curated picks into an email digest.
pub const DIGEST_SOURCE: &str = r##"// Inputs: picks (output.picks from score-videos), timezone
const picks = Array.isArray(input.picks) ? input.picks : JSON.parse(input.picks || "[]");
const timezone = input.timezone || "America/New_York";

const escape = (value) =>
  String(value).replace(/[&<>"]/g, (c) => ({ "&": "&amp;", "<": "&lt;", ">": "&gt;", '"': "&quot;" })[c]);

const rows = picks
  .map(
    (pick, index) => `
  <tr>
    <td>${index + 1}</td>
    <td>${escape(pick.window)}</td>
    <td><a href="${escape(pick.url)}">${escape(pick.title)}</a></td>
    <td>${escape(pick.channel)}</td>
    <td>${pick.score}</td>
  </tr>`
  )
  .join("");

const date = new Date().toLocaleDateString("en-US", { timeZone: timezone, dateStyle: "medium" });

const html = `
<h2>TikTok queue for ${date}</h2>
<table border="1" cellpadding="6" cellspacing="0">
  <tr><th>#</th><th>Window</th><th>Video</th><th>Channel</th><th>Score</th></tr>${rows}
</table>
<p>Captions and Drive links are in the Queue sheet and on each calendar event.</p>`;

const text = picks
  .map((pick, index) => `${index + 1}. [${pick.window}] ${pick.title} (${pick.channel})`)
  .join("\n");

return {
  subject: `🎬 ${picks.length} TikTok imagines queued for ${date}`,
  html,
  text,
};"##;

/// Build the two built-in code artifacts.
pub fn artifacts() -> Result<CodeArtifacts, ValidationError> {
    CodeArtifacts::new(
        CodeArtifact::new(SCORING, "Scoring & Caption Builder", "javascript", SCORING_SOURCE),
        CodeArtifact::new(DIGEST, "Digest Formatter", "javascript", DIGEST_SOURCE),
    )
}
