use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use crate::config;
use crate::state::{self, RevealedSections};

/// Smooth-scrolls the section with the given id to the top of the viewport.
/// Silently does nothing when no element carries that id.
fn scroll_to_section(section_id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(section_id) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let show_header = use_state(|| true);
    let revealed = use_reducer(RevealedSections::default);
    let last_y = use_mut_ref(|| 0.0_f64);

    // On initial mount, set the document title and honor a URL fragment
    // (e.g. arriving at /#about from the archive sidebar). The browser cannot
    // do the fragment scroll itself: the target element does not exist until
    // this component renders. Without a fragment, start at the top.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if let Some(document) = window.document() {
                        document.set_title("Shaurya Chandna");
                    }
                    let hash = window.location().hash().unwrap_or_default();
                    match state::section_from_hash(&hash) {
                        Some(section) => scroll_to_section(section),
                        None => window.scroll_to_with_x_and_y(0.0, 0.0),
                    }
                }
                || ()
            },
            (),
        );
    }

    // Header visibility follows scroll direction
    {
        let show_header = show_header.clone();
        let last_y = last_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let y = window_clone.scroll_y().unwrap_or(0.0);
                    let prev = *last_y.borrow();
                    show_header.set(state::header_visible_after(prev, y));
                    *last_y.borrow_mut() = y;
                }) as Box<dyn FnMut()>);

                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                window
                    .add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Reveal sections the first time they intersect the viewport
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();

                let callback = Closure::wrap(Box::new(
                    move |entries: Vec<IntersectionObserverEntry>| {
                        for entry in entries {
                            if entry.is_intersecting() {
                                if let Some(section) = entry.target().get_attribute("data-section")
                                {
                                    revealed.dispatch(section);
                                }
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(Vec<IntersectionObserverEntry>)>);

                let options = IntersectionObserverInit::new();
                options.set_threshold(&JsValue::from(0.1));
                // Symmetric inset so sections trigger slightly before exact entry
                options.set_root_margin("-50px 0px -50px 0px");

                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .unwrap();

                let sections = document.query_selector_all("[data-section]").unwrap();
                for i in 0..sections.length() {
                    if let Some(node) = sections.item(i) {
                        if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                            observer.observe(&element);
                        }
                    }
                }

                move || {
                    observer.disconnect();
                    drop(callback);
                }
            },
            (),
        );
    }

    let on_logo_click = Callback::from(|_| {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let header_class = if *show_header {
        "site-header"
    } else {
        "site-header header-hidden"
    };

    let section_class = |id: &str| {
        if revealed.contains(id) {
            "home-section revealed"
        } else {
            "home-section"
        }
    };

    let nav_items = [
        ("about", "01.", "About"),
        ("experience", "02.", "Experience"),
        ("work", "03.", "Work"),
        ("contact", "04.", "Contact"),
    ];

    let about_skills = [
        "Python", "SQL", "C/C++", "React", "PyTorch", "TensorFlow", "FastAPI", "Pandas",
        "scikit-learn", "XGBoost", "LangChain", "OpenAI API",
    ];

    html! {
        <div class="home-page">
            <div class={header_class}>
                <div class="header-inner">
                    <button onclick={on_logo_click} aria-label="Home" class="logo-button">
                        <svg width="40" height="44" viewBox="0 0 40 44" fill="none" xmlns="http://www.w3.org/2000/svg">
                            <path d="M20 2 36 11v22L20 42 4 33V11L20 2Z" stroke="#08CB00" stroke-width="3" stroke-linejoin="round"/>
                            <text x="20" y="27" text-anchor="middle" font-size="16" fill="#08CB00" font-family="inherit">{"S"}</text>
                        </svg>
                    </button>
                    <nav class="header-nav">
                        {
                            nav_items.iter().map(|(id, num, label)| {
                                let id = *id;
                                let onclick = Callback::from(move |_| scroll_to_section(id));
                                html! {
                                    <button key={id} {onclick} class="nav-item">
                                        <span class="nav-num">{num}</span>{label}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                        <a href={config::resume_url()} target="_blank" rel="noopener noreferrer" class="resume-button">
                            {"Resume"}
                        </a>
                    </nav>
                </div>
            </div>

            <section id="hero" class="hero-section">
                <div class="hero-content">
                    <h1 class="fade-in" style="animation-delay: 200ms;">{"Shaurya Chandna."}</h1>
                    <h2 class="fade-in" style="animation-delay: 300ms;">{"I build data-driven solutions."}</h2>
                    <p class="fade-in" style="animation-delay: 400ms;">
                        {"I'm a computational mathematics student at the University of Waterloo, specializing in data science and aspiring to work in machine learning. I'm currently focused on learning, building and applying intelligent models that solve real-world problems."}
                    </p>
                    <a href={config::resume_url()} target="_blank" rel="noopener noreferrer" class="resume-button hero-cta fade-in" style="animation-delay: 500ms;">
                        {"Check out my resume!"}
                    </a>
                </div>
            </section>

            <section id="about" data-section="about" class={section_class("about")}>
                <div class="section-content">
                    <h2 class="section-title">{"About Me"}</h2>
                    <div class="about-grid">
                        <div class="about-text">
                            <p>
                                {"Hi there! My name is Shaurya and I enjoy turning math, code, and too much coffee into machine intelligence. The idea that raw numbers could be transformed into insights that drive real-world solutions is what hooked me into the field."}
                            </p>
                            <p>
                                {"I specialize in developing hybrid forecasting systems, RAG-powered applications, and automated data pipelines. My experience spans from government energy analytics to startup AI solutions, with a focus on creating scalable systems that deliver measurable business impact."}
                            </p>
                            <div class="skill-pills">
                                {
                                    about_skills.iter().map(|skill| html! {
                                        <span key={*skill} class="skill-pill">{skill}</span>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                        <div class="about-photo">
                            <img src={format!("{}/profile-photo.jpg", config::base_path())} alt="Shaurya Chandna" />
                        </div>
                    </div>
                </div>
            </section>

            <section id="experience" data-section="experience" class={section_class("experience")}>
                <div class="section-content">
                    <h2 class="section-title">{"Experience"}</h2>
                    <div class="experience-list">
                        <div class="experience-card">
                            <div class="experience-header">
                                <div>
                                    <h3>{"Data Analyst Intern"}</h3>
                                    <p class="experience-place">{"Ontario Ministry of Energy and Electrification • Toronto, ON"}</p>
                                </div>
                                <span class="experience-dates">{"Jan 2025 - Apr 2025"}</span>
                            </div>
                            <ul class="experience-points">
                                <li><span class="point-marker">{"▶"}</span><span>{"Built a centralized data automation pipeline using Python and Pandas to extract, clean, and enrich energy datasets for Ontario buildings via REST APIs"}</span></li>
                                <li><span class="point-marker">{"▶"}</span><span>{"Automated 40% of all company maps and dashboards workflows, decreasing manual cleaning time by 97%"}</span></li>
                            </ul>
                            <div class="skill-pills small">
                                {
                                    ["Python", "Pandas", "REST APIs", "ArcGIS", "Data Automation"].iter().map(|skill| html! {
                                        <span key={*skill} class="skill-pill">{skill}</span>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div class="experience-card">
                            <div class="experience-header">
                                <div>
                                    <h3>{"Data Science Intern"}</h3>
                                    <p class="experience-place">{"Innova Solutions • Atlanta, Georgia"}</p>
                                </div>
                                <span class="experience-dates">{"May 2024 - Aug 2024"}</span>
                            </div>
                            <ul class="experience-points">
                                <li><span class="point-marker">{"▶"}</span><span>{"Developed a hybrid time series forecasting system combining Croston's Method and ARIMA with a decision tree selector"}</span></li>
                                <li><span class="point-marker">{"▶"}</span><span>{"Reduced RMSE by 4% on usage prediction by engineering temporal embeddings and applying Bayesian hyperparameter tuning on XGBoost"}</span></li>
                            </ul>
                            <div class="skill-pills small">
                                {
                                    ["Python", "XGBoost", "ARIMA", "Time Series", "SHAP Analysis"].iter().map(|skill| html! {
                                        <span key={*skill} class="skill-pill">{skill}</span>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div class="experience-card">
                            <div class="experience-header">
                                <div>
                                    <h3>{"Data Analyst Intern"}</h3>
                                    <p class="experience-place">{"ElevonData • New York, NY"}</p>
                                </div>
                                <span class="experience-dates">{"May 2023 - Aug 2023"}</span>
                            </div>
                            <ul class="experience-points">
                                <li><span class="point-marker">{"▶"}</span><span>{"Developed end-to-end ETL pipelines for a telecom cost-reduction initiative using Airflow, Talend DI, and SQL"}</span></li>
                                <li><span class="point-marker">{"▶"}</span><span>{"Designed advanced Power BI reports with custom DAX measures, driving a 7.3% reduction in project costs"}</span></li>
                            </ul>
                            <div class="skill-pills small">
                                {
                                    ["SQL", "Airflow", "Power BI", "DAX", "ETL Pipelines"].iter().map(|skill| html! {
                                        <span key={*skill} class="skill-pill">{skill}</span>
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="work" data-section="work" class={section_class("work")}>
                <div class="section-content">
                    <h2 class="section-title">{"Featured Work"}</h2>
                    <div class="work-grid">
                        <div class="work-card">
                            <div class="work-card-header">
                                <div class="work-icon">{"🧠"}</div>
                                <div>
                                    <h3>{"QuizMaster"}</h3>
                                    <p class="work-subtitle">{"RAG-Powered Document Quiz Generator"}</p>
                                </div>
                            </div>
                            <p class="work-description">
                                {"Architected a Retrieval Augmented Generation (RAG) system to transform resource documents into interactive quizzes. Utilized OpenAI's text-embedding-3-small model and Pinecone vector database with optimized indexing strategies."}
                            </p>
                            <div class="skill-pills small">
                                {
                                    ["Python", "FastAPI", "OpenAI API", "Pinecone", "LangChain", "React"].iter().map(|skill| html! {
                                        <span key={*skill} class="skill-pill">{skill}</span>
                                    }).collect::<Html>()
                                }
                            </div>
                            <div class="work-links">
                                <a href="https://github.com/ShauryaChandna/QuizMaster" target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                            </div>
                        </div>

                        <div class="work-card">
                            <div class="work-card-header">
                                <div class="work-icon">{"🤖"}</div>
                                <div>
                                    <h3>{"Ads for AI Agents"}</h3>
                                    <p class="work-subtitle">{"RAG-Powered Advertisement System"}</p>
                                </div>
                            </div>
                            <p class="work-description">
                                {"Built a RAG-powered model to recommend personalized advertisements for AI agents. Optimized Qdrant vector database with HNSW indexing and fine-tuned OpenAI embeddings using contrastive learning."}
                            </p>
                            <div class="skill-pills small">
                                {
                                    ["Python", "QDrant", "LangChain", "SBERT", "OpenAI API"].iter().map(|skill| html! {
                                        <span key={*skill} class="skill-pill">{skill}</span>
                                    }).collect::<Html>()
                                }
                            </div>
                            <div class="work-links">
                                <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            <section id="contact" data-section="contact" class={section_class("contact")}>
                <div class="section-content contact-content">
                    <h2 class="section-title">{"Get In Touch"}</h2>
                    <p>
                        {"I'm always interested in new opportunities and exciting projects in data science and machine learning. Whether you have a question or just want to say hi, I'll try my best to get back to you!"}
                    </p>
                    <a href={config::MAILTO_URL} class="resume-button contact-cta">
                        {"Say Hello"}
                    </a>
                </div>
            </section>

            <div class="social-bar fade-in" style="animation-delay: 700ms;">
                <a href={config::GITHUB_URL} target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"🐙"}</a>
                <a href={config::LINKEDIN_URL} target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"in"}</a>
                <a href={config::MAILTO_URL} aria-label="Email">{"@"}</a>
                <div class="social-rule"></div>
            </div>

            <footer class="site-footer">
                <p>
                    {"Loosely designed in Figma and coded by yours truly. Built with Rust, Yew and Trunk, deployed with GitHub. All text is set in the Space Grotesk typeface."}
                </p>
            </footer>

            <style>
                {r#"
:root {
    --background: #000000;
    --foreground: #EEEEEE;
    --muted: #A9B4B6;
    --accent: #08CB00;
    --secondary: #253900;
}

.home-page {
    min-height: 100vh;
    background: var(--background);
    color: var(--foreground);
    overflow-x: hidden;
    font-family: 'Space Grotesk', 'Inter', system-ui, sans-serif;
}

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    transition: transform 0.3s ease;
    transform: translateY(0);
}

.site-header.header-hidden {
    transform: translateY(-100%);
}

.header-inner {
    width: 100%;
    box-sizing: border-box;
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 1.5rem;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(8px);
}

.logo-button {
    background: none;
    border: none;
    padding: 0;
    cursor: pointer;
}

.header-nav {
    display: none;
    align-items: center;
    gap: 1.5rem;
}

@media (min-width: 640px) {
    .header-nav {
        display: flex;
    }
}

.nav-item {
    background: none;
    border: none;
    padding: 0;
    cursor: pointer;
    font-family: inherit;
    font-size: 0.875rem;
    color: rgba(238, 238, 238, 0.7);
    transition: color 0.2s ease;
}

.nav-item:hover {
    color: var(--accent);
}

.nav-num {
    color: var(--accent);
    margin-right: 0.25rem;
}

.resume-button {
    font-size: 0.875rem;
    color: var(--accent);
    border: 1px solid rgba(8, 203, 0, 0.6);
    padding: 0.5rem 1rem;
    border-radius: 0.375rem;
    text-decoration: none;
    transition: transform 0.2s ease, border-color 0.2s ease, box-shadow 0.2s ease;
}

.resume-button:hover {
    border-color: var(--accent);
    transform: translateY(-2px);
    box-shadow: 0 8px 20px rgba(8, 203, 0, 0.25);
}

.hero-section {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 5rem 1.5rem 4rem;
}

.hero-content {
    margin: 0 auto;
    max-width: 48rem;
    width: 100%;
}

.hero-content h1 {
    font-size: 3.75rem;
    font-weight: 600;
    letter-spacing: -0.025em;
    margin: 0;
}

.hero-content h2 {
    font-size: 3.75rem;
    font-weight: 600;
    letter-spacing: -0.025em;
    color: rgba(238, 238, 238, 0.4);
    margin: 0.5rem 0 0;
}

.hero-content p {
    color: var(--muted);
    margin-top: 1.5rem;
    max-width: 60%;
    line-height: 1.6;
}

.hero-cta {
    display: inline-flex;
    align-items: center;
    margin-top: 2rem;
    padding: 0.75rem 1.25rem;
}

.fade-in {
    opacity: 0;
    animation: fade-in 0.8s ease forwards;
}

@keyframes fade-in {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}

.home-section {
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 5rem 1.5rem;
    opacity: 0;
    transform: translateY(2rem);
    transition: opacity 1s ease, transform 1s ease;
}

.home-section.revealed {
    opacity: 1;
    transform: translateY(0);
}

.section-content {
    margin: 0 auto;
    max-width: 56rem;
    width: 100%;
}

.section-title {
    font-size: 2.5rem;
    font-weight: 600;
    color: var(--accent);
    margin: 0 0 2rem;
}

.about-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
}

@media (min-width: 768px) {
    .about-grid {
        grid-template-columns: 3fr 2fr;
    }
}

.about-text p {
    color: rgba(238, 238, 238, 0.8);
    font-size: 1.125rem;
    line-height: 1.7;
    margin: 0 0 1.5rem;
}

.about-photo {
    display: flex;
    justify-content: center;
}

.about-photo img {
    width: 20rem;
    height: 20rem;
    object-fit: cover;
    border-radius: 0.5rem;
    border: 2px solid rgba(8, 203, 0, 0.2);
}

.skill-pills {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
}

.skill-pills.small {
    gap: 0.5rem;
}

.skill-pill {
    padding: 0.5rem 1rem;
    background: rgba(8, 203, 0, 0.2);
    color: var(--accent);
    border-radius: 9999px;
    font-size: 0.875rem;
}

.skill-pills.small .skill-pill {
    padding: 0.25rem 0.75rem;
}

.experience-list {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}

.experience-card,
.work-card {
    background: rgba(37, 57, 0, 0.3);
    backdrop-filter: blur(4px);
    border: 1px solid rgba(8, 203, 0, 0.2);
    border-radius: 0.5rem;
    padding: 2rem;
    transition: background 0.3s ease;
}

.experience-card:hover,
.work-card:hover {
    background: rgba(37, 57, 0, 0.5);
}

.experience-header {
    display: flex;
    flex-direction: column;
    margin-bottom: 1rem;
}

@media (min-width: 768px) {
    .experience-header {
        flex-direction: row;
        align-items: center;
        justify-content: space-between;
    }
}

.experience-header h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0;
}

.experience-place {
    color: var(--accent);
    margin: 0.25rem 0 0;
}

.experience-dates {
    font-size: 0.875rem;
    color: rgba(238, 238, 238, 0.6);
}

.experience-points {
    list-style: none;
    padding: 0;
    margin: 0 0 1rem;
    color: rgba(238, 238, 238, 0.8);
    line-height: 1.6;
}

.experience-points li {
    display: flex;
    align-items: flex-start;
    margin-bottom: 0.5rem;
}

.point-marker {
    color: var(--accent);
    margin-right: 0.75rem;
    margin-top: 0.25rem;
}

.work-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 2rem;
}

@media (min-width: 768px) {
    .work-grid {
        grid-template-columns: 1fr 1fr;
    }
}

.work-card-header {
    display: flex;
    gap: 1rem;
    margin-bottom: 1.5rem;
}

.work-icon {
    width: 4rem;
    height: 4rem;
    background: rgba(8, 203, 0, 0.2);
    border-radius: 0.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.5rem;
    flex-shrink: 0;
}

.work-card-header h3 {
    font-size: 1.25rem;
    font-weight: 600;
    margin: 0 0 0.5rem;
}

.work-subtitle {
    color: var(--accent);
    font-size: 0.875rem;
    margin: 0;
}

.work-description {
    color: rgba(238, 238, 238, 0.8);
    line-height: 1.6;
    margin: 0 0 1.5rem;
}

.work-links {
    margin-top: 1rem;
}

.work-links a {
    color: var(--accent);
    font-size: 0.875rem;
    text-decoration: none;
    transition: color 0.2s ease;
}

.work-links a:hover {
    color: rgba(8, 203, 0, 0.8);
}

.contact-content {
    text-align: center;
}

.contact-content p {
    color: rgba(238, 238, 238, 0.8);
    font-size: 1.125rem;
    line-height: 1.7;
    margin: 0 auto 3rem;
    max-width: 42rem;
}

.contact-cta {
    display: inline-flex;
    align-items: center;
    padding: 1rem 2rem;
}

.social-bar {
    position: fixed;
    bottom: 4rem;
    left: 1.5rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
}

.social-bar a {
    color: rgba(238, 238, 238, 0.6);
    font-size: 1.5rem;
    text-decoration: none;
    transition: color 0.2s ease;
}

.social-bar a:hover {
    color: var(--foreground);
}

.social-rule {
    width: 1px;
    height: 6rem;
    background: rgba(238, 238, 238, 0.3);
}

.site-footer {
    border-top: 1px solid rgba(8, 203, 0, 0.2);
    background: rgba(37, 57, 0, 0.3);
    backdrop-filter: blur(4px);
    padding: 1.5rem;
    margin-top: 2.5rem;
}

.site-footer p {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
    color: rgba(238, 238, 238, 0.6);
    font-size: 0.75rem;
    line-height: 1.6;
}

@media (max-width: 640px) {
    .hero-content h1,
    .hero-content h2 {
        font-size: 2.5rem;
    }

    .hero-content p {
        max-width: 100%;
    }

    .social-bar {
        display: none;
    }
}
"#}
            </style>
        </div>
    }
}
