// src/specs/lists.rs
//! List regions on the team page. Each yields a `GroupedList`:
//! - coaching staff: titles = position headings, groups = names per `<ul>`
//! - team updates: titles = headlines, groups = `[date, content]`
//! - achievements: titles = award category, groups = seasons

use scraper::Html;

use crate::config::consts::*;
use crate::core::html::{doc_texts, selector, text_of, texts_in};
use crate::error::{Error, Result};
use crate::table::GroupedList;

use super::{PageKind, Spec};

pub struct CoachingStaffSpec;
pub struct TeamUpdatesSpec;
pub struct AchievementsSpec;

pub static COACHING_STAFF: CoachingStaffSpec = CoachingStaffSpec;
pub static TEAM_UPDATES: TeamUpdatesSpec = TeamUpdatesSpec;
pub static ACHIEVEMENTS: AchievementsSpec = AchievementsSpec;

impl Spec for CoachingStaffSpec {
    type Output = GroupedList;

    fn name(&self) -> &'static str { "coaching staff" }
    fn page(&self) -> PageKind { PageKind::Team }

    fn extract(&self, doc: &Html) -> Result<GroupedList> {
        let section = doc
            .select(&selector(COACHES_SECTION)?)
            .next()
            .ok_or_else(|| Error::missing(self.name()))?;

        let titles = texts_in(section, &selector("h3")?);
        let li = selector("li")?;
        let groups = section
            .select(&selector("ul")?)
            .map(|ul| texts_in(ul, &li))
            .collect();

        Ok(GroupedList::new(titles, groups))
    }
}

impl Spec for TeamUpdatesSpec {
    type Output = GroupedList;

    fn name(&self) -> &'static str { "team updates" }
    fn page(&self) -> PageKind { PageKind::Team }

    fn extract(&self, doc: &Html) -> Result<GroupedList> {
        let dates = doc_texts(doc, &selector(NEWS_DATE)?);
        let headlines = doc_texts(doc, &selector(NEWS_HEADLINE)?);
        let contents = doc_texts(doc, &selector(NEWS_CONTENT)?);

        if headlines.is_empty() {
            return Err(Error::missing(self.name()));
        }

        // zip: an article missing any part is dropped
        let (titles, groups): (Vec<String>, Vec<Vec<String>>) = dates
            .into_iter()
            .zip(headlines)
            .zip(contents)
            .map(|((date, headline), content)| (headline, vec![date, content]))
            .unzip();

        Ok(GroupedList::new(titles, groups))
    }
}

impl Spec for AchievementsSpec {
    type Output = GroupedList;

    fn name(&self) -> &'static str { "achievements" }
    fn page(&self) -> PageKind { PageKind::Team }

    fn extract(&self, doc: &Html) -> Result<GroupedList> {
        let h3 = selector("h3")?;
        let li = selector("li")?;

        let mut titles = Vec::new();
        let mut groups = Vec::new();
        for group in doc.select(&selector(AWARDS_GROUP)?) {
            let title = group
                .select(&h3)
                .next()
                .map(text_of)
                .ok_or_else(|| Error::missing(self.name()))?;
            titles.push(title);
            groups.push(texts_in(group, &li));
        }

        if titles.is_empty() {
            return Err(Error::missing(self.name()));
        }
        Ok(GroupedList::new(titles, groups))
    }
}

/// One news item as shown on the About tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update<'a> {
    pub date: &'a str,
    pub headline: &'a str,
    pub content: &'a str,
}

/// Read the `TEAM_UPDATES` grouping back as news items.
pub fn updates(list: &GroupedList) -> impl Iterator<Item = Update<'_>> {
    list.iter().map(|(headline, parts)| Update {
        date: parts.first().map(String::as_str).unwrap_or(""),
        headline,
        content: parts.get(1).map(String::as_str).unwrap_or(""),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <section class="TeamProfile_sectionCoaches__e66bL">
          <h3>Head Coach</h3><ul><li>Joe Mazzulla</li></ul>
          <h3>Assistant Coaches</h3><ul><li>Charles Lee</li><li>Sam Cassell</li></ul>
        </section>
        <article>
          <p class="TeamFantasyNews_articleDate__SrBm7">Apr 12</p>
          <h4 class="TeamFantasyNews_articleHeadline__02sbs">Tatum scores 40</h4>
          <p class="TeamFantasyNews_articleContent__x7vps">Big night in Boston.</p>
        </article>
        <article>
          <p class="TeamFantasyNews_articleDate__SrBm7">Apr 10</p>
          <h4 class="TeamFantasyNews_articleHeadline__02sbs">Brown questionable</h4>
          <p class="TeamFantasyNews_articleContent__x7vps">Ankle.</p>
        </article>
        <div class="TeamAwards_group__XU0o9"><h3>NBA Championships</h3>
          <ul><li>2008</li><li>2024</li></ul></div>
        <div class="TeamAwards_group__XU0o9"><h3>Conference Titles</h3>
          <ul><li>2022</li></ul></div>
    "#;

    #[test]
    fn coaching_staff_groups_by_heading() {
        let g = COACHING_STAFF.extract(&Html::parse_document(PAGE)).unwrap();
        assert_eq!(g.titles, vec!["Head Coach", "Assistant Coaches"]);
        assert_eq!(g.groups[1], vec!["Charles Lee", "Sam Cassell"]);
    }

    #[test]
    fn updates_zip_date_headline_content() {
        let g = TEAM_UPDATES.extract(&Html::parse_document(PAGE)).unwrap();
        let items: Vec<_> = updates(&g).collect();
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            Update { date: "Apr 12", headline: "Tatum scores 40", content: "Big night in Boston." }
        );
        assert_eq!(items[1].headline, "Brown questionable");
    }

    #[test]
    fn achievements_keep_encounter_order() {
        let g = ACHIEVEMENTS.extract(&Html::parse_document(PAGE)).unwrap();
        assert_eq!(g.titles, vec!["NBA Championships", "Conference Titles"]);
        assert_eq!(g.groups[0], vec!["2008", "2024"]);
    }

    #[test]
    fn missing_regions_are_not_found() {
        let doc = Html::parse_document("<p>nothing here</p>");
        assert!(COACHING_STAFF.extract(&doc).unwrap_err().is_not_found());
        assert!(TEAM_UPDATES.extract(&doc).unwrap_err().is_not_found());
        assert!(ACHIEVEMENTS.extract(&doc).unwrap_err().is_not_found());
    }
}
