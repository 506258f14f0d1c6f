#[cfg(test)]
pub const FRONT_MATTER: &str = "---
layout: post
title: Hello World
date: 2024-03-05 06:20:53
categories: go rust
---
";
