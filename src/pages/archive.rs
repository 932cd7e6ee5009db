use yew::prelude::*;
use yew_router::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config;
use crate::projects::{archive_projects, Project};
use crate::state;
use crate::Route;

fn open_in_new_tab(link: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(link, "_blank");
    }
}

#[derive(Properties, PartialEq)]
struct ProjectRowProps {
    project: Project,
}

#[function_component(ProjectRow)]
fn project_row(props: &ProjectRowProps) -> Html {
    let project = &props.project;

    let onclick = {
        let link = project.link.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&link))
    };
    // The inner link must not also trigger the row's own navigation
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <tr {onclick} class="project-row">
            <td class="cell-year">{&project.year}</td>
            <td class="cell-name">{&project.name}</td>
            <td class="cell-made-at">{&project.made_at}</td>
            <td>
                <div class="tech-pills">
                    {
                        project.built_with.iter().map(|tech| html! {
                            <span key={tech.as_str()} class="tech-pill">{tech}</span>
                        }).collect::<Html>()
                    }
                </div>
            </td>
            <td>
                <a
                    href={project.link.clone()}
                    target="_blank"
                    rel="noopener noreferrer"
                    onclick={stop_propagation}
                    class="cell-link"
                >
                    {"GitHub →"}
                </a>
            </td>
        </tr>
    }
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectRowProps) -> Html {
    let project = &props.project;

    let onclick = {
        let link = project.link.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&link))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div {onclick} class="project-card">
            <div class="card-header">
                <h3>{&project.name}</h3>
                <span class="card-year">{&project.year}</span>
            </div>
            <p class="card-made-at">{&project.made_at}</p>
            <div class="tech-pills">
                {
                    project.built_with.iter().map(|tech| html! {
                        <span key={tech.as_str()} class="tech-pill">{tech}</span>
                    }).collect::<Html>()
                }
            </div>
            <a
                href={project.link.clone()}
                target="_blank"
                rel="noopener noreferrer"
                onclick={stop_propagation}
                class="card-link"
            >
                {"View on GitHub →"}
            </a>
        </div>
    }
}

#[function_component(Archive)]
pub fn archive() -> Html {
    let mouse_position = use_state(|| (0, 0));
    let projects = use_memo(|_| archive_projects(), ());

    // Set the document title only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    document.set_title("Archive | Shaurya Chandna");
                }
                || ()
            },
            (),
        );
    }

    // Track the pointer so the background gradient can follow it
    {
        let mouse_position = mouse_position.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let mousemove_callback = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    mouse_position.set((e.client_x(), e.client_y()));
                }) as Box<dyn FnMut(web_sys::MouseEvent)>);

                document
                    .add_event_listener_with_callback(
                        "mousemove",
                        mousemove_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "mousemove",
                            mousemove_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let (x, y) = *mouse_position;
    let page_style = format!("background: {};", state::pointer_gradient(x, y));

    let home_anchor = |section: &str| format!("{}/#{}", config::base_path(), section);

    html! {
        <div class="archive-page" style={page_style}>
            // Desktop layout: fixed sidebar plus scrollable table
            <div class="archive-desktop">
                <div class="archive-sidebar">
                    <div>
                        <Link<Route> to={Route::Home} classes="sidebar-name">
                            {"Shaurya Chandna"}
                        </Link<Route>>
                        <h2 class="sidebar-tagline">{"Computational Mathematics Student"}</h2>
                        <p class="sidebar-blurb">
                            {"Building innovative solutions through code. Passionate about creating meaningful technology that makes a difference."}
                        </p>

                        <nav class="sidebar-nav">
                            <a href={home_anchor("about")}>{"About"}</a>
                            <a href={home_anchor("experience")}>{"Experience"}</a>
                            <a href={home_anchor("work")}>{"Work"}</a>
                            <Link<Route> to={Route::Archive} classes="sidebar-current">
                                {"Archive"}
                            </Link<Route>>
                        </nav>
                    </div>

                    <div class="sidebar-social">
                        <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                        <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    </div>
                </div>

                <div class="archive-main">
                    <div class="archive-intro">
                        <Link<Route> to={Route::Home} classes="back-link">
                            {"← Back to Home"}
                        </Link<Route>>
                        <h1>{"Project Archive"}</h1>
                        <p>
                            {"A comprehensive list of all the projects I've worked on over the years. Each project represents a learning opportunity and a step forward in my development journey."}
                        </p>
                    </div>

                    <div class="table-wrapper">
                        <table class="projects-table">
                            <thead>
                                <tr>
                                    <th>{"Year"}</th>
                                    <th>{"Project"}</th>
                                    <th>{"Made at"}</th>
                                    <th>{"Built with"}</th>
                                    <th>{"Link"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    projects.iter().map(|project| html! {
                                        <ProjectRow key={project.name.as_str()} project={project.clone()} />
                                    }).collect::<Html>()
                                }
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            // Mobile layout: same list rendered as cards
            <div class="archive-mobile">
                <div class="archive-intro">
                    <Link<Route> to={Route::Home} classes="back-link">
                        {"← Back to Home"}
                    </Link<Route>>
                    <h1>{"Project Archive"}</h1>
                    <p>{"A comprehensive list of all the projects I've worked on over the years."}</p>
                </div>

                <div class="card-list">
                    {
                        projects.iter().map(|project| html! {
                            <ProjectCard key={project.name.as_str()} project={project.clone()} />
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <footer class="archive-footer">
                <p>
                    {"Loosely designed in Figma and coded by yours truly. Built with Rust, Yew and Trunk, deployed with GitHub. All text is set in the Space Grotesk typeface."}
                </p>
            </footer>

            <style>
                {r#"
.archive-page {
    min-height: 100vh;
    background-color: #000000;
    color: #EEEEEE;
    overflow-x: hidden;
    font-family: 'Space Grotesk', 'Inter', system-ui, sans-serif;
}

.archive-desktop {
    display: none;
}

.archive-mobile {
    display: block;
    padding: 1.5rem;
}

@media (min-width: 1024px) {
    .archive-desktop {
        display: block;
        min-height: 100vh;
    }

    .archive-mobile {
        display: none;
    }
}

.archive-sidebar {
    width: 45vw;
    height: 100vh;
    position: fixed;
    left: 0;
    top: 0;
    padding: 2.5rem;
    box-sizing: border-box;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
}

.sidebar-name {
    display: block;
    font-size: 1.875rem;
    font-weight: 700;
    color: #08CB00;
    margin-bottom: 0.5rem;
    text-decoration: none;
    transition: color 0.2s ease;
}

.sidebar-name:hover {
    color: rgba(8, 203, 0, 0.8);
}

.sidebar-tagline {
    font-size: 1.25rem;
    font-weight: 400;
    color: rgba(238, 238, 238, 0.8);
    margin: 0 0 1rem;
}

.sidebar-blurb {
    color: rgba(238, 238, 238, 0.6);
    line-height: 1.6;
    margin: 0 0 2rem;
}

.sidebar-nav {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}

.sidebar-nav a {
    color: rgba(238, 238, 238, 0.7);
    text-decoration: none;
    transition: color 0.2s ease;
}

.sidebar-nav a:hover {
    color: #08CB00;
}

.sidebar-nav a.sidebar-current {
    color: #08CB00;
}

.sidebar-social {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.sidebar-social a {
    color: rgba(238, 238, 238, 0.7);
    text-decoration: none;
    transition: color 0.2s ease;
}

.sidebar-social a:hover {
    color: #08CB00;
}

.archive-main {
    margin-left: 45vw;
    width: 55vw;
    padding: 2.5rem;
    box-sizing: border-box;
    overflow-y: auto;
}

.archive-intro {
    margin-bottom: 2rem;
}

.back-link {
    display: inline-flex;
    align-items: center;
    color: rgba(238, 238, 238, 0.8);
    text-decoration: none;
    margin-bottom: 1.5rem;
    transition: color 0.2s ease;
}

.back-link:hover {
    color: #EEEEEE;
}

.archive-intro h1 {
    font-size: 1.875rem;
    font-weight: 600;
    letter-spacing: -0.025em;
    margin: 0 0 0.5rem;
}

.archive-intro p {
    color: rgba(238, 238, 238, 0.7);
    line-height: 1.6;
    margin: 0;
}

.table-wrapper {
    overflow-x: auto;
}

.projects-table {
    width: 100%;
    border-collapse: separate;
    border-spacing: 0 0.5rem;
}

.projects-table th {
    text-align: left;
    padding: 0.5rem;
    color: rgba(238, 238, 238, 0.5);
    font-weight: 500;
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.project-row {
    cursor: pointer;
    transition: background 0.2s ease;
}

.project-row:hover {
    background: rgba(255, 255, 255, 0.05);
}

.project-row td {
    padding: 0.75rem 0.5rem;
    vertical-align: top;
}

.cell-year {
    color: rgba(238, 238, 238, 0.6);
}

.cell-name {
    color: #EEEEEE;
    font-weight: 500;
}

.cell-made-at {
    color: rgba(238, 238, 238, 0.7);
}

.cell-link {
    color: rgba(238, 238, 238, 0.8);
    text-decoration: none;
    transition: color 0.2s ease;
}

.cell-link:hover {
    color: #EEEEEE;
}

.tech-pills {
    display: flex;
    flex-wrap: wrap;
    gap: 0.375rem;
}

.tech-pill {
    padding: 0.125rem 0.625rem;
    background: rgba(255, 255, 255, 0.05);
    color: rgba(238, 238, 238, 0.8);
    border-radius: 9999px;
    font-size: 0.75rem;
}

.archive-mobile .back-link {
    color: #08CB00;
}

.archive-mobile .back-link:hover {
    color: rgba(8, 203, 0, 0.8);
}

.archive-mobile h1 {
    color: #08CB00;
    font-size: 1.875rem;
    font-weight: 700;
    margin: 0 0 1rem;
}

.archive-mobile .archive-intro p {
    color: rgba(238, 238, 238, 0.8);
    margin-bottom: 2rem;
}

.card-list {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.project-card {
    background: rgba(37, 57, 0, 0.3);
    backdrop-filter: blur(4px);
    border: 1px solid rgba(8, 203, 0, 0.2);
    border-radius: 0.5rem;
    padding: 1.5rem;
    cursor: pointer;
    transition: background 0.3s ease;
}

.project-card:hover {
    background: rgba(37, 57, 0, 0.5);
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: flex-start;
    margin-bottom: 0.75rem;
}

.card-header h3 {
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0;
}

.card-year {
    color: rgba(238, 238, 238, 0.6);
    font-size: 0.875rem;
}

.card-made-at {
    color: #08CB00;
    margin: 0 0 1rem;
}

.project-card .tech-pills {
    gap: 0.5rem;
    margin-bottom: 1rem;
}

.project-card .tech-pill {
    padding: 0.25rem 0.75rem;
    background: rgba(8, 203, 0, 0.2);
    color: #08CB00;
    font-size: 0.875rem;
}

.card-link {
    color: #08CB00;
    text-decoration: none;
    transition: color 0.2s ease;
}

.card-link:hover {
    color: rgba(8, 203, 0, 0.8);
}

.archive-footer {
    border-top: 1px solid rgba(8, 203, 0, 0.2);
    background: rgba(37, 57, 0, 0.3);
    backdrop-filter: blur(4px);
    padding: 2rem;
    margin-top: 4rem;
}

.archive-footer p {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
    color: rgba(238, 238, 238, 0.6);
    font-size: 0.875rem;
    line-height: 1.6;
}
"#}
            </style>
        </div>
    }
}
