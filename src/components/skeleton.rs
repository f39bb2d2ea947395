use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// Number of placeholder blocks
    #[prop_or(1)]
    pub count: usize,

    /// Height in pixels
    #[prop_or(20)]
    pub height: u32,

    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder blocks shown while data is loading
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    let style = format!("height: {}px;", props.height);

    (0..props.count)
        .map(|_| {
            html! {
                <div class={classes!("skeleton", props.class.clone())} style={style.clone()} />
            }
        })
        .collect::<Html>()
}
