// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTML templates for the home page and episode detail pages.
//!
//! Markup only; visual styling comes from an external stylesheet.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::episode::Episode;

use super::output::episode_href;
use super::props::HomeProps;

const SITE_TITLE: &str = "Podcastr";
const STYLESHEET: &str = "/styles.css";
const PLAY_ICON: &str = "/play-green.svg";
const PLAY_LABEL: &str = "Tocar episódio";

/// Wraps page content in the shared document shell
fn base_document(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(STYLESHEET);
            }
            body {
                (content)
            }
        }
    }
}

/// Presentational play control; there is no player behind it
fn play_button() -> Markup {
    html! {
        button type="button" {
            img src=(PLAY_ICON) alt=(PLAY_LABEL);
        }
    }
}

fn thumbnail(episode: &Episode, size: u32) -> Markup {
    html! {
        img src=(episode.thumbnail()) alt=(episode.title())
            width=(size) height=(size) style="object-fit: cover" loading="lazy";
    }
}

fn latest_card(episode: &Episode) -> Markup {
    html! {
        li {
            (thumbnail(episode, 192))
            div.episode-details {
                a href=(episode_href(episode.id())) { (episode.title()) }
                p { (episode.members()) }
                span { (episode.published_at()) }
                span { (episode.duration_as_string()) }
            }
            (play_button())
        }
    }
}

fn episode_row(episode: &Episode) -> Markup {
    html! {
        tr {
            td { (thumbnail(episode, 120)) }
            td {
                a href=(episode_href(episode.id())) { (episode.title()) }
            }
            td { (episode.members()) }
            td.date { (episode.published_at()) }
            td { (episode.duration_as_string()) }
            td { (play_button()) }
        }
    }
}

/// Renders the home page: latest releases as cards, the rest as a table
pub fn render_home(props: &HomeProps) -> Markup {
    let content = html! {
        div.homepage {
            section.latest-episodes {
                h2 { "Últimos lançamentos" }
                ul {
                    @for episode in &props.latest_episodes {
                        (latest_card(episode))
                    }
                }
            }
            section.all-episodes {
                h2 { "Todos Episódios" }
                table cellspacing="0" {
                    thead {
                        tr {
                            th {}
                            th { "Podcast" }
                            th { "Integrantes" }
                            th { "Data" }
                            th { "Duração" }
                            th {}
                        }
                    }
                    tbody {
                        @for episode in &props.all_episodes {
                            (episode_row(episode))
                        }
                    }
                }
            }
        }
    };

    base_document(SITE_TITLE, content)
}

/// Renders the detail page for one episode
///
/// The description is HTML from the API and is inserted as-is.
pub fn render_episode(episode: &Episode) -> Markup {
    let title = format!("{} | {SITE_TITLE}", episode.title());

    let content = html! {
        div.episode {
            div.thumbnail-container {
                a.back href="../index.html" { "Voltar" }
                img src=(episode.thumbnail()) alt=(episode.title())
                    width="700" height="160" style="object-fit: cover";
                (play_button())
            }
            header {
                h1 { (episode.title()) }
                span { (episode.members()) }
                span { (episode.published_at()) }
                span { (episode.duration_as_string()) }
            }
            audio controls preload="none" src=(episode.url()) {}
            div.description {
                (PreEscaped(episode.description()))
            }
        }
    };

    base_document(&title, content)
}
